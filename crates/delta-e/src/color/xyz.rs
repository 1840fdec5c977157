//! CIE XYZ tristimulus color type

use super::lab::{Lab, Normalization};
use super::linear_rgb::LinearRgb;

/// A color in CIE 1931 XYZ, on the 0-100 scale (Y = 100 for reference white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

/// Reference white: CIE standard illuminant D65, 2° standard observer.
///
/// This is the white point sRGB is defined against.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.000,
    z: 108.883,
};

impl Xyz {
    /// Create a new XYZ color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to CIE L*a*b* relative to [`D65_WHITE`].
    ///
    /// `normalization` selects how each component is divided by the
    /// reference white before the CIE transfer; see [`Normalization`].
    pub fn to_lab(self, normalization: Normalization) -> Lab {
        Lab::from_xyz(self, normalization)
    }
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB (D65) to XYZ.
    ///
    /// Uses the four-decimal IEC 61966-2-1 matrix. Fed 0-100 linear values,
    /// white lands on (95.05, 100.0, 108.9).
    fn from(rgb: LinearRgb) -> Self {
        Xyz {
            x: rgb.r * 0.4124 + rgb.g * 0.3576 + rgb.b * 0.1805,
            y: rgb.r * 0.2126 + rgb.g * 0.7152 + rgb.b * 0.0722,
            z: rgb.r * 0.0193 + rgb.g * 0.1192 + rgb.b * 0.9505,
        }
    }
}
