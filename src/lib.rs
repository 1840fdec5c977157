//! color-grep - grep for colors that look alike
//!
//! Finds `#RRGGBB` tokens in files whose CIEDE2000 distance to a reference
//! color is within a threshold. The color science lives in the `delta-e`
//! crate; this library exposes the scanning and reporting layers for the
//! binary and for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
