//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Operation requires a different channel count.
    #[error("channel mismatch: {0}")]
    ChannelMismatch(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
