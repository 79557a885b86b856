//! Error types for color operations.
//!
//! Conversions that require a specific channel layout come in two forms:
//! an asserting form for callers treating the layout as an invariant, and a
//! fallible `try_` form returning [`ColorError`] for callers that validate
//! at runtime.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Conversion requires a specific channel count.
    #[error("channel mismatch: expected {expected} channels, got {actual}")]
    ChannelMismatch {
        /// Channel count the conversion requires
        expected: usize,
        /// Channel count the image actually has
        actual: usize,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
