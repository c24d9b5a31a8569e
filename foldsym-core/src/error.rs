//! Structured error types for the foldsym workspace.

use thiserror::Error;

/// Unified error type for all foldsym operations.
#[derive(Debug, Error)]
pub enum FoldsymError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Domain or function registry lookup failure
    #[error("resolution error: {0}")]
    Resolution(String),

    /// Order-of-symmetry estimation failure
    #[error("order detection error: {0}")]
    OrderDetection(String),
}

/// Convenience alias used throughout the foldsym workspace.
pub type Result<T> = std::result::Result<T, FoldsymError>;
