//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate,
//! and the only space the sRGB -> XYZ matrix is valid in.

use super::srgb::Srgb;

/// Normalized sRGB value above which the power segment of the curve applies.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// A color in linear RGB color space, scaled to 0.0..=100.0.
///
/// The 0-100 scale matches the reference white used by [`Xyz`](super::Xyz),
/// so the XYZ matrix can be applied without rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity, 0.0..=100.0)
    pub r: f64,
    /// Green channel (linear light intensity, 0.0..=100.0)
    pub g: f64,
    /// Blue channel (linear light intensity, 0.0..=100.0)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values on the 0-100 scale.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Decode one 8-bit sRGB channel to linear light on the 0-100 scale.
///
/// Applies the IEC 61966-2-1 electro-optical transfer function:
/// `((v + 0.055) / 1.055)^2.4` above `0.04045`, `v / 12.92` at or below it.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    let linear = if v > SRGB_LINEAR_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    linear * 100.0
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB using the exact transfer function.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
