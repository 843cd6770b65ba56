//! Error types for passqr

use thiserror::Error;

/// Main error type for the toolkit's ambient surfaces
///
/// The password engine itself never fails: its inputs are clamped, not rejected.
#[derive(Error, Debug)]
pub enum ToolkitError {
    /// Generation options could not be parsed
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// QR payload has nothing to encode
    #[error("QR payload is empty")]
    EmptyPayload,

    /// QR encoder reported a failure
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for ToolkitError {
    fn from(err: serde_json::Error) -> Self {
        ToolkitError::InvalidOptions(err.to_string())
    }
}

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;
