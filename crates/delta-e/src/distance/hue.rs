//! Hue angle helpers for CIEDE2000

/// Hue angle of the chroma vector `(a, b)`, in degrees within `0.0..360.0`.
///
/// Quadrant-aware arctangent with explicit handling of the axes:
///
/// | input            | result |
/// |------------------|--------|
/// | `a >= 0, b == 0` | 0      |
/// | `a < 0, b == 0`  | 180    |
/// | `a == 0, b > 0`  | 90     |
/// | `a == 0, b < 0`  | 270    |
///
/// Elsewhere `atan(b / a)` is shifted by 0 (first quadrant), 180 (`a < 0`)
/// or 360 (`a > 0, b < 0`).
///
/// # Example
///
/// ```
/// use delta_e::hue_angle;
///
/// assert_eq!(hue_angle(0.0, 0.0), 0.0);
/// assert_eq!(hue_angle(0.0, -1.0), 270.0);
/// assert!((hue_angle(-1.0, -1.0) - 225.0).abs() < 1e-12);
/// ```
pub fn hue_angle(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return if a < 0.0 { 180.0 } else { 0.0 };
    }
    if a == 0.0 {
        return if b > 0.0 { 90.0 } else { 270.0 };
    }

    let bias = if a < 0.0 {
        180.0
    } else if b < 0.0 {
        360.0
    } else {
        0.0
    };
    (b / a).atan().to_degrees() + bias
}

/// Round to 12 decimal places.
///
/// Hue differences are compared against 180° after rounding, so that two
/// hues exactly opposite each other do not flip between branches on the
/// last bit of floating-point noise.
#[inline]
pub(crate) fn round12(value: f64) -> f64 {
    (value * 1e12).round() / 1e12
}
