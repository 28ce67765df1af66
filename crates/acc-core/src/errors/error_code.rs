//! AccErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code
/// string that embedding applications can match on.
pub trait AccErrorCode {
    /// Returns the error code string (e.g., "NO_CANDIDATE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const NO_CANDIDATE: &str = "NO_CANDIDATE";
pub const STRUCTURE_INCONSISTENCY: &str = "STRUCTURE_INCONSISTENCY";
pub const INCOMPLETE_BUILD: &str = "INCOMPLETE_BUILD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
