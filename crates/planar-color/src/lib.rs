//! # planar-color
//!
//! Color-space codec for planar floating-point images.
//!
//! This crate provides the color conversions of the planar-rs workspace:
//!
//! - **Grayscale** - Rec.601 luma reduction to a new single-channel image
//! - **RGB <-> HSV** - bidirectional conversion with exact branch contracts
//!
//! Conversions are pure per-pixel functions; the whole-image forms walk the
//! planes in flat order and have no cross-pixel state.
//!
//! # Architecture
//!
//! ```text
//!        planar-color
//!             |
//!         planar-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use planar_core::Image;
//! use planar_color::{rgb_to_hsv, hsv_to_rgb, to_grayscale};
//!
//! let mut img = Image::from_data(1, 1, 3, vec![1.0, 0.0, 0.0]).unwrap();
//!
//! // In-place round trip through HSV
//! rgb_to_hsv(&mut img);
//! hsv_to_rgb(&mut img);
//! assert_eq!(img.get(0, 0, 0), 1.0);
//!
//! // Luma reduction allocates a new single-channel image
//! let gray = to_grayscale(&img);
//! assert_eq!(gray.channels(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grayscale;
pub mod hsv;

pub use error::{ColorError, ColorResult};
pub use grayscale::{to_grayscale, try_to_grayscale};
pub use hsv::{
    HUE_RED_WRAP_THRESHOLD, hsv_to_rgb, hsv_to_rgb_pixel, rgb_to_hsv, rgb_to_hsv_pixel,
    try_hsv_to_rgb, try_rgb_to_hsv,
};
