//! Error handling for ACC.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod acc2_error;
pub mod acc_error;
pub mod build_error;
pub mod config_error;
pub mod error_code;

pub use acc2_error::Acc2Error;
pub use acc_error::AccError;
pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use error_code::AccErrorCode;
