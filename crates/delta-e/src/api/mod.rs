//! The three entry points callers need.
//!
//! Scanners and reporters only go through these functions: parse a token,
//! convert it, measure it. Validation happens once in [`parse_color`];
//! everything downstream is total.

use crate::color::{Lab, LinearRgb, Normalization, Srgb, Xyz};
use crate::distance::ciede2000;
use crate::error::ParseColorError;

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive) into an [`Srgb`].
///
/// # Example
///
/// ```
/// use delta_e::{parse_color, Srgb};
///
/// assert_eq!(parse_color("#ADD8E6").unwrap(), Srgb::new(0xAD, 0xD8, 0xE6));
/// assert!(parse_color("#12345").is_err());
/// ```
pub fn parse_color(text: &str) -> Result<Srgb, ParseColorError> {
    text.parse()
}

/// Convert sRGB to CIE L*a*b* (D65) with [`Normalization::Standard`].
///
/// # Example
///
/// ```
/// use delta_e::{to_lab, Srgb};
///
/// let white = to_lab(Srgb::new(255, 255, 255));
/// assert!((white.l - 100.0).abs() < 1e-9);
/// ```
pub fn to_lab(color: Srgb) -> Lab {
    to_lab_with(color, Normalization::Standard)
}

/// Convert sRGB to CIE L*a*b* (D65) with the given normalization.
pub fn to_lab_with(color: Srgb, normalization: Normalization) -> Lab {
    Xyz::from(LinearRgb::from(color)).to_lab(normalization)
}

/// CIEDE2000 distance between two L*a*b* colors.
///
/// # Example
///
/// ```
/// use delta_e::{parse_color, perceptual_distance, to_lab};
///
/// let red = to_lab(parse_color("#FF0000").unwrap());
/// let green = to_lab(parse_color("#00FF00").unwrap());
/// assert!(perceptual_distance(red, green) > 50.0);
/// ```
#[inline]
pub fn perceptual_distance(a: Lab, b: Lab) -> f64 {
    ciede2000(a, b)
}
