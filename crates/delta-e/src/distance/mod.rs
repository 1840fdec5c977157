//! Perceptual color difference
//!
//! CIEDE2000 over [`Lab`](crate::Lab) values, plus the hue-angle helper it
//! is built on.

mod ciede2000;
mod hue;

pub use ciede2000::{ciede2000, JUST_NOTICEABLE_DIFFERENCE};
pub use hue::hue_angle;
