//! CIE L*a*b* color type
//!
//! L*a*b* is the space CIEDE2000 is defined on. Distances are only
//! meaningful between values produced against the same reference white.

use super::xyz::{Xyz, D65_WHITE};
use crate::distance::ciede2000;

/// CIE threshold (6/29)^3 between the cube-root and linear segments.
const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment near black.
const LAB_KAPPA_SLOPE: f64 = 7.787;

/// How XYZ components are normalized against the reference white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// `t = value / reference`, the CIE definition.
    #[default]
    Standard,
    /// `t = value / reference - value`.
    ///
    /// Reproduces the L*a*b* values computed by earlier color-grep releases.
    /// Lightness and chroma come out far outside their nominal ranges (white
    /// lands near L* = -89426), so thresholds tuned for [`Standard`] do not
    /// carry over.
    ///
    /// [`Standard`]: Normalization::Standard
    Legacy,
}

impl Normalization {
    #[inline]
    fn apply(self, value: f64, reference: f64) -> f64 {
        match self {
            Normalization::Standard => value / reference,
            Normalization::Legacy => value / reference - value,
        }
    }
}

/// A color in CIE L*a*b*.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white) for sRGB colors
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped; a* and b* typically stay within ±128.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

/// CIE lightness transfer function.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// # Example
    ///
    /// ```
    /// use delta_e::Lab;
    ///
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(gray.chroma(), 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from XYZ relative to [`D65_WHITE`].
    pub fn from_xyz(xyz: Xyz, normalization: Normalization) -> Self {
        let fx = lab_f(normalization.apply(xyz.x, D65_WHITE.x));
        let fy = lab_f(normalization.apply(xyz.y, D65_WHITE.y));
        let fz = lab_f(normalization.apply(xyz.z, D65_WHITE.z));

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Chroma `sqrt(a² + b²)`: distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// CIEDE2000 distance to `other`. See [`ciede2000`].
    ///
    /// # Example
    ///
    /// ```
    /// use delta_e::Lab;
    ///
    /// let a = Lab::new(50.0, 2.5, 0.0);
    /// let b = Lab::new(50.0, 3.2972, 0.0);
    /// assert!((a.distance(b) - 1.0).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        ciede2000(self, other)
    }
}

impl From<Xyz> for Lab {
    /// Convert from XYZ with [`Normalization::Standard`].
    fn from(xyz: Xyz) -> Self {
        Lab::from_xyz(xyz, Normalization::Standard)
    }
}
