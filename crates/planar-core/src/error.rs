//! Error types for planar-core operations.
//!
//! This module provides a unified error handling system for image buffer
//! construction and channel-shaped operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes that surface as recoverable
//! errors rather than caller contract violations:
//! - Buffer length mismatches at construction time
//! - Wrong channel counts in fallible conversion entry points
//!
//! Out-of-range pixel coordinates are never an error: reads clamp to the
//! nearest edge and writes are dropped (see [`crate::image::Image`]).
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::image::Image`] - Buffer construction
//! - `planar-color` - Fallible conversion entry points

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during planar image construction and conversion.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match `width * height * channels`.
    ///
    /// Returned by [`Image::from_data`](crate::image::Image::from_data) when
    /// the supplied buffer cannot hold exactly one sample per coordinate.
    #[error("invalid dimensions {width}x{height}x{channels}: {reason}")]
    InvalidDimensions {
        /// Requested image width
        width: usize,
        /// Requested image height
        height: usize,
        /// Requested channel count
        channels: usize,
        /// Human-readable detail
        reason: String,
    },

    /// Operation requires a specific channel count.
    ///
    /// Returned by fallible conversion entry points; the infallible forms
    /// assert instead.
    #[error("channel mismatch: expected {expected} channels, got {actual}")]
    ChannelMismatch {
        /// Channel count the operation requires
        expected: usize,
        /// Channel count the image actually has
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] with a detail message.
    pub fn invalid_dimensions(
        width: usize,
        height: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }
}
