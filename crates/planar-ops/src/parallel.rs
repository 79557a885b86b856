//! Parallel image operations using Rayon.
//!
//! This module provides parallelized versions of the whole-image operations
//! for better performance on multi-core systems. Every pixel is independent,
//! so each function partitions the iteration space and reuses the sequential
//! per-pixel functions - output is identical to the sequential forms.
//!
//! # Example
//!
//! ```rust
//! use planar_core::Image;
//! use planar_ops::parallel;
//!
//! let mut img = Image::filled(256, 256, 3, 0.5);
//! parallel::rgb_to_hsv(&mut img).unwrap();
//! ```

use crate::{OpsError, OpsResult};
use planar_color::{hsv_to_rgb_pixel, rgb_to_hsv_pixel};
use planar_core::{Image, luminance_rec601};
use rayon::prelude::*;

/// Splits the buffer of a 3-channel image into its three planes.
fn split_rgb_planes(image: &mut Image) -> OpsResult<(&mut [f32], &mut [f32], &mut [f32])> {
    if image.channels() != 3 {
        return Err(OpsError::ChannelMismatch(format!(
            "expected 3 channels, got {}",
            image.channels()
        )));
    }
    let plane = image.pixel_count();
    let (first, rest) = image.data_mut().split_at_mut(plane);
    let (second, third) = rest.split_at_mut(plane);
    Ok((first, second, third))
}

/// Applies a per-pixel triple function across the planes in parallel.
fn convert_planes_par(
    image: &mut Image,
    f: impl Fn([f32; 3]) -> [f32; 3] + Sync,
) -> OpsResult<()> {
    let (first, second, third) = split_rgb_planes(image)?;

    first
        .par_iter_mut()
        .zip_eq(second.par_iter_mut())
        .zip_eq(third.par_iter_mut())
        .for_each(|((a, b), c)| {
            let out = f([*a, *b, *c]);
            *a = out[0];
            *b = out[1];
            *c = out[2];
        });
    Ok(())
}

/// Parallel unit-range clamp.
///
/// Identical output to [`crate::clamp_to_unit`].
pub fn clamp_to_unit(image: &mut Image) {
    image.data_mut().par_iter_mut().for_each(|v| {
        if *v > 1.0 {
            *v = 1.0;
        } else if *v < 0.0 {
            *v = 0.0;
        }
    });
}

/// Parallel RGB -> HSV conversion, in place.
///
/// Identical output to [`planar_color::rgb_to_hsv`].
///
/// # Errors
///
/// Returns [`OpsError::ChannelMismatch`] if the image does not have exactly
/// 3 channels.
pub fn rgb_to_hsv(image: &mut Image) -> OpsResult<()> {
    convert_planes_par(image, rgb_to_hsv_pixel)
}

/// Parallel HSV -> RGB conversion, in place.
///
/// Identical output to [`planar_color::hsv_to_rgb`].
///
/// # Errors
///
/// Returns [`OpsError::ChannelMismatch`] if the image does not have exactly
/// 3 channels.
pub fn hsv_to_rgb(image: &mut Image) -> OpsResult<()> {
    convert_planes_par(image, hsv_to_rgb_pixel)
}

/// Parallel grayscale reduction into a new single-channel image.
///
/// Identical output to [`planar_color::to_grayscale`].
///
/// # Errors
///
/// Returns [`OpsError::ChannelMismatch`] if the image does not have exactly
/// 3 channels.
pub fn to_grayscale(image: &Image) -> OpsResult<Image> {
    if image.channels() != 3 {
        return Err(OpsError::ChannelMismatch(format!(
            "expected 3 channels, got {}",
            image.channels()
        )));
    }

    let plane = image.pixel_count();
    let (r, rest) = image.data().split_at(plane);
    let (g, b) = rest.split_at(plane);

    let mut gray = Image::new(image.width(), image.height(), 1);
    gray.data_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, out)| {
            *out = luminance_rec601([r[i], g[i], b[i]]);
        });
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic sample pattern spanning in- and out-of-range values.
    fn test_image(width: usize, height: usize, channels: usize) -> Image {
        let data: Vec<f32> = (0..width * height * channels)
            .map(|i| (i % 17) as f32 / 8.0 - 0.25)
            .collect();
        Image::from_data(width, height, channels, data).unwrap()
    }

    #[test]
    fn test_parallel_clamp_matches_sequential() {
        let mut par = test_image(64, 32, 3);
        let mut seq = par.clone();

        clamp_to_unit(&mut par);
        crate::clamp_to_unit(&mut seq);

        assert_eq!(par.data(), seq.data());
    }

    #[test]
    fn test_parallel_hsv_matches_sequential() {
        let mut par = test_image(64, 32, 3);
        crate::clamp_to_unit(&mut par); // valid RGB domain
        let mut seq = par.clone();

        rgb_to_hsv(&mut par).unwrap();
        planar_color::rgb_to_hsv(&mut seq);
        assert_eq!(par.data(), seq.data());

        hsv_to_rgb(&mut par).unwrap();
        planar_color::hsv_to_rgb(&mut seq);
        assert_eq!(par.data(), seq.data());
    }

    #[test]
    fn test_parallel_grayscale_matches_sequential() {
        let src = test_image(48, 48, 3);
        let par = to_grayscale(&src).unwrap();
        let seq = planar_color::to_grayscale(&src);
        assert_eq!(par.data(), seq.data());
    }

    #[test]
    fn test_parallel_channel_validation() {
        let mut gray = Image::new(8, 8, 1);
        assert!(rgb_to_hsv(&mut gray).is_err());
        assert!(hsv_to_rgb(&mut gray).is_err());
        assert!(to_grayscale(&gray).is_err());
    }
}
