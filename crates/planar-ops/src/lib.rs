//! # planar-ops
//!
//! Whole-image transforms for planar floating-point images.
//!
//! This crate provides the in-place buffer operations of the planar-rs
//! workspace:
//!
//! - [`shift_channel`] - add a delta to one channel plane
//! - [`clamp_to_unit`] - clamp every sample into `[0, 1]`
//! - [`parallel`] - rayon-parallel variants of the whole-image operations
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::{shift_channel, clamp_to_unit};
//!
//! let mut img = Image::new(64, 64, 3);
//! shift_channel(&mut img, 0, 0.4);
//! shift_channel(&mut img, 0, 0.8);
//! clamp_to_unit(&mut img);
//! assert_eq!(img.get(0, 0, 0), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use transform::{clamp_to_unit, shift_channel};
