//! CIEDE2000 color difference (ΔE00)
//!
//! CIE Technical Report 142-2001, with the parametric weights
//! kL = kC = kH = 1. The formula follows Sharma, Wu & Dalal (2005),
//! "The CIEDE2000 Color-Difference Formula: Implementation Notes,
//! Supplementary Test Data, and Mathematical Observations".

use super::hue::{hue_angle, round12};
use crate::color::Lab;

/// 25^7, the chroma pivot of the G and RC terms.
const POW25_7: f64 = 6_103_515_625.0;

/// A ΔE00 below this is not perceptible to a typical observer.
pub const JUST_NOTICEABLE_DIFFERENCE: f64 = 1.0;

/// `sqrt(c^7 / (c^7 + 25^7))`, shared by the G and RC terms.
#[inline]
fn chroma_ratio(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// CIEDE2000 perceptual distance between two L*a*b* colors.
///
/// Zero for identical colors, about 1.0 at the just-noticeable threshold,
/// roughly 100 between black and white.
///
/// The formula is designed to be symmetric; with the branch ordering used
/// here swapping the arguments gives the same result up to floating-point
/// rounding.
///
/// # Example
///
/// ```
/// use delta_e::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // Chroma correction: stretch a* for near-neutral colors
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_ratio(c_mean));

    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;
    let c1_prime = (a1_prime * a1_prime + lab1.b * lab1.b).sqrt();
    let c2_prime = (a2_prime * a2_prime + lab2.b * lab2.b).sqrt();
    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);

    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;

    // Hue is undefined for a neutral color; both the difference and the
    // mean fall back to degenerate forms when either chroma is zero.
    let neutral = c1_prime * c2_prime == 0.0;

    let delta_h_prime = if neutral {
        0.0
    } else {
        let raw = h2_prime - h1_prime;
        let rounded = round12(raw);
        if rounded.abs() <= 180.0 {
            raw
        } else if rounded > 180.0 {
            raw - 360.0
        } else {
            raw + 360.0
        }
    };
    let delta_big_h_prime =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime / 2.0).to_radians().sin();

    let l_prime_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;

    let h_prime_mean = if neutral {
        h1_prime + h2_prime
    } else if round12(h1_prime - h2_prime).abs() > 180.0 {
        if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        }
    } else {
        (h1_prime + h2_prime) / 2.0
    };

    let t = 1.0 - 0.17 * (h_prime_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_prime_mean).to_radians().cos()
        + 0.32 * (3.0 * h_prime_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_prime_mean - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_prime_mean - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_ratio(c_prime_mean);

    let l_offset_sq = (l_prime_mean - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let term_l = delta_l_prime / sl;
    let term_c = delta_c_prime / sc;
    let term_h = delta_big_h_prime / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}
