//! Grayscale reduction for 3-channel RGB images.
//!
//! Produces a new single-channel image from the Rec.601 luma weighting
//! `Y = 0.299*R + 0.587*G + 0.114*B`. The source image is never mutated;
//! conversions that change the channel count always allocate.

use crate::{ColorError, ColorResult};
use planar_core::{Image, luminance_rec601};

/// Reduces a 3-channel RGB image to a new single-channel luma image.
///
/// Output width and height match the input; the channel count is fixed
/// at 1.
///
/// # Panics
///
/// Panics if the image does not have exactly 3 channels. Use
/// [`try_to_grayscale`] to validate instead.
///
/// # Example
///
/// ```rust
/// use planar_core::Image;
/// use planar_color::to_grayscale;
///
/// let red = Image::from_data(1, 1, 3, vec![1.0, 0.0, 0.0]).unwrap();
/// let gray = to_grayscale(&red);
/// assert_eq!(gray.channels(), 1);
/// assert!((gray.get(0, 0, 0) - 0.299).abs() < 1e-6);
/// ```
pub fn to_grayscale(image: &Image) -> Image {
    assert_eq!(
        image.channels(),
        3,
        "to_grayscale requires a 3-channel image"
    );

    let plane = image.pixel_count();
    let (r, rest) = image.data().split_at(plane);
    let (g, b) = rest.split_at(plane);

    let mut gray = Image::new(image.width(), image.height(), 1);
    let out = gray.data_mut();
    for i in 0..plane {
        out[i] = luminance_rec601([r[i], g[i], b[i]]);
    }
    gray
}

/// Fallible form of [`to_grayscale`].
///
/// # Errors
///
/// Returns [`ColorError::ChannelMismatch`] if the image does not have
/// exactly 3 channels.
pub fn try_to_grayscale(image: &Image) -> ColorResult<Image> {
    if image.channels() != 3 {
        return Err(ColorError::ChannelMismatch {
            expected: 3,
            actual: image.channels(),
        });
    }
    Ok(to_grayscale(image))
}
