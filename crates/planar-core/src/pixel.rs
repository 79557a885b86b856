//! Per-pixel helpers and luminance constants.
//!
//! # Luminance
//!
//! Grayscale reduction uses the Rec.601 luma weighting:
//! `Y = 0.299*R + 0.587*G + 0.114*B`
//!
//! # Used By
//!
//! - `planar-color` - grayscale reduction
//! - `planar-ops` - parallel grayscale

// ============================================================================
// Rec.601 Luminance Constants
// ============================================================================

/// Rec.601 luminance coefficient for red channel.
///
/// Used in the classic luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luminance coefficient for green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luminance coefficient for blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Rec.601 luminance coefficients as an array [R, G, B].
///
/// # Example
/// ```
/// use planar_core::pixel::REC601_LUMA;
/// let rgb = [0.5, 0.3, 0.2];
/// let luma = rgb[0] * REC601_LUMA[0] + rgb[1] * REC601_LUMA[1] + rgb[2] * REC601_LUMA[2];
/// ```
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Calculate Rec.601 luminance from RGB values.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`
///
/// # Arguments
/// * `rgb` - RGB values as [R, G, B] array
///
/// # Returns
/// The luminance value
///
/// # Example
/// ```
/// use planar_core::pixel::luminance_rec601;
/// let luma = luminance_rec601([1.0, 0.0, 0.0]);
/// assert!((luma - 0.299).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_rec601(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC601_LUMA_R + rgb[1] * REC601_LUMA_G + rgb[2] * REC601_LUMA_B
}
