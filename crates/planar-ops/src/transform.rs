//! In-place value transforms: per-channel shift and unit-range clamp.
//!
//! Both operations mutate the image buffer directly in flat-offset order.
//! Whole-image copy is [`Image::clone`] - the buffer is exclusively owned,
//! so a clone is already a deep, element-wise copy.
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::{shift_channel, clamp_to_unit};
//!
//! let mut img = Image::new(4, 4, 3);
//! shift_channel(&mut img, 1, 1.5);
//! clamp_to_unit(&mut img);
//! assert_eq!(img.get(0, 0, 1), 1.0);
//! assert_eq!(img.get(0, 0, 0), 0.0);
//! ```

use planar_core::Image;
use tracing::{debug, trace};

/// Adds `delta` to every sample in channel `c`, leaving other channels
/// untouched.
///
/// Channel addressing is direct, with no clamping - the write covers the
/// plane offset range `[c*w*h, (c+1)*w*h)`.
///
/// # Panics
///
/// Panics if `c >= image.channels()`.
pub fn shift_channel(image: &mut Image, c: usize, delta: f32) {
    trace!(c, delta, "shift_channel");
    for v in image.plane_mut(c) {
        *v += delta;
    }
}

/// Clamps every sample into `[0, 1]` in place.
///
/// Samples above 1 become 1, samples below 0 become 0, and samples already
/// in range are untouched. Idempotent.
///
/// # Example
///
/// ```rust
/// use planar_core::Image;
/// use planar_ops::clamp_to_unit;
///
/// let mut img = Image::from_data(2, 1, 1, vec![1.5, -0.25]).unwrap();
/// clamp_to_unit(&mut img);
/// assert_eq!(img.data(), &[1.0, 0.0]);
/// ```
pub fn clamp_to_unit(image: &mut Image) {
    let (width, height) = image.dimensions();
    trace!(width, height, "clamp_to_unit");
    debug!(width, height, "Clamping image to unit range");

    for v in image.data_mut() {
        if *v > 1.0 {
            *v = 1.0;
        } else if *v < 0.0 {
            *v = 0.0;
        }
    }
}
