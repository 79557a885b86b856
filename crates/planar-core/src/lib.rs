//! # planar-core
//!
//! Core types for planar floating-point image processing.
//!
//! This crate provides the foundational types used throughout the planar-rs
//! workspace:
//!
//! - [`Image`] - Owned planar channel-major sample buffer
//! - [`clamp_coordinate`] - Edge-clamp policy for signed coordinates
//! - [`luminance_rec601`] - Rec.601 luma weighting
//!
//! ## Design Philosophy
//!
//! An [`Image`] is a plain value: it exclusively owns its buffer, `Clone`
//! is a deep copy, and two images never alias. The accessor is total over
//! out-of-range coordinates but asymmetric on purpose - reads clamp to the
//! nearest edge, writes outside the image are dropped.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of planar-rs and has no internal
//! dependencies. The other workspace crates build on it:
//!
//! ```text
//! planar-core (this crate)
//!    ^
//!    |
//!    +-- planar-color (grayscale, RGB <-> HSV)
//!    +-- planar-ops (shift, clamp, parallel paths)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::{Image, clamp_coordinate};
pub use pixel::{REC601_LUMA, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R, luminance_rec601};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use planar_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, clamp_coordinate};
    pub use crate::pixel::{
        REC601_LUMA, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R, luminance_rec601,
    };
}
