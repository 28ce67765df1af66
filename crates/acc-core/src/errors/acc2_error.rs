//! ACC2 transform errors.

use super::build_error::BuildError;
use super::error_code::{self, AccErrorCode};

/// Errors raised by the secondary ACC2 pass. Fatal for that pass only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Acc2Error {
    #[error("structure inconsistency: child {id} is neither a known area nor a known merge level")]
    StructureInconsistency { id: String },

    #[error("area angles unavailable, builder stopped early: {0}")]
    Build(#[from] BuildError),
}

impl AccErrorCode for Acc2Error {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StructureInconsistency { .. } => error_code::STRUCTURE_INCONSISTENCY,
            Self::Build(_) => error_code::INCOMPLETE_BUILD,
        }
    }
}
