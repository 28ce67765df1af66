//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::AccErrorCode;
use super::{Acc2Error, BuildError, ConfigError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccError {
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("ACC2 error: {0}")]
    Acc2(#[from] Acc2Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AccErrorCode for AccError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Build(e) => e.error_code(),
            Self::Acc2(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
