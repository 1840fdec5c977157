//! Color types and conversion utilities
//!
//! Each color space has its own type, so a conversion step can't be skipped
//! by accident. The pipeline only runs one way:
//!
//! ```text
//! Srgb --> LinearRgb --> Xyz --> Lab
//! ```
//!
//! # Example
//!
//! ```
//! use delta_e::{Lab, LinearRgb, Srgb, Xyz};
//!
//! let srgb = Srgb::new(128, 64, 32);
//! let linear = LinearRgb::from(srgb);
//! let xyz = Xyz::from(linear);
//! let lab = Lab::from(xyz);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod lab;
mod linear_rgb;
mod srgb;
mod xyz;

pub use lab::{Lab, Normalization};
pub use linear_rgb::{srgb_to_linear, LinearRgb};
pub use srgb::Srgb;
pub use xyz::{Xyz, D65_WHITE};
