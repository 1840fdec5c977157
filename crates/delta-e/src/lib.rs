//! delta-e: sRGB to CIE L*a*b* conversion and CIEDE2000 color difference
//!
//! This library answers one question: do two hex colors look the same to a
//! human? It converts 8-bit sRGB through linear light and CIE XYZ into
//! CIE L*a*b*, then measures the CIEDE2000 difference.
//!
//! # Quick Start
//!
//! ```
//! use delta_e::{parse_color, perceptual_distance, to_lab};
//!
//! let brand = to_lab(parse_color("#336699").unwrap());
//! let found = to_lab(parse_color("#336698").unwrap());
//!
//! // Below 1.0 the difference is not perceptible
//! assert!(perceptual_distance(brand, found) < 1.0);
//! ```
//!
//! # Color Spaces
//!
//! Each stage has its own type, and the pipeline only runs one way:
//!
//! - [`Srgb`]: 8-bit gamma-encoded channels, what hex tokens describe
//! - [`LinearRgb`]: linear light on a 0-100 scale
//! - [`Xyz`]: CIE 1931 tristimulus values relative to [`D65_WHITE`]
//! - [`Lab`]: CIE L*a*b*, the space CIEDE2000 is defined on
//!
//! # Color Science
//!
//! ## Pipeline
//!
//! ```text
//! "#RRGGBB"
//!     |  parse_color()          validation happens here and only here
//!     v
//! Srgb (u8 x 3)
//!     |  v = c / 255
//!     |  v > 0.04045 ? ((v + 0.055) / 1.055)^2.4 : v / 12.92
//!     |  x 100
//!     v
//! LinearRgb (0..100)
//!     |  sRGB (D65) 3x3 matrix, four-decimal coefficients
//!     v
//! Xyz (0..100, white ~ 95.05 / 100 / 108.9)
//!     |  t = value / white          (Normalization::Standard)
//!     |  t > 0.008856 ? t^(1/3) : 7.787 t + 16/116
//!     v
//! Lab  L* 0..100, a*/b* ~ +-128
//! ```
//!
//! Every step uses the closed-form expression; there are no lookup tables,
//! so the same input always gives bit-identical output.
//!
//! ## Why CIEDE2000
//!
//! Euclidean distance in L*a*b* (CIE76) overstates differences between
//! saturated colors and understates them in the blues. CIEDE2000 corrects
//! both with lightness, chroma and hue weighting functions (SL, SC, SH) and a
//! rotation term (RT) for the blue region. The cost is branchy angle
//! arithmetic:
//!
//! - hue angles wrap at 360°, so hue differences and means take the short
//!   way around the circle;
//! - a neutral color (zero chroma) has no hue, which collapses the hue
//!   difference to zero and the mean hue to a plain sum;
//! - comparisons against 180° use the difference rounded to 12 decimals so
//!   opposite hues do not flip branches on floating-point noise.
//!
//! A ΔE00 around [`JUST_NOTICEABLE_DIFFERENCE`] (1.0) is the threshold of
//! visibility. The implementation reproduces the Sharma, Wu & Dalal (2005)
//! reference data to four decimals.
//!
//! ## Normalization
//!
//! Earlier color-grep releases divided each XYZ component by the reference
//! white and then subtracted the component again (`value / white - value`).
//! That is not the CIE definition and pushes L* far out of range.
//! [`Normalization::Standard`] is the default; [`Normalization::Legacy`]
//! is kept for reproducing old results.

pub mod api;
pub mod color;
pub mod distance;
pub mod error;
pub mod reference;

#[cfg(test)]
mod domain_tests;

pub use api::{parse_color, perceptual_distance, to_lab, to_lab_with};
pub use color::{srgb_to_linear, Lab, LinearRgb, Normalization, Srgb, Xyz, D65_WHITE};
pub use distance::{ciede2000, hue_angle, JUST_NOTICEABLE_DIFFERENCE};
pub use error::{ParseColorError, ReferenceError};
pub use reference::ReferenceSet;
