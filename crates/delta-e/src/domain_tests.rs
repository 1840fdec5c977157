//! Domain-critical regression tests for delta-e.
//!
//! These tests sweep the whole 8-bit gamut (sparsely) rather than a few
//! hand-picked values. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{parse_color, perceptual_distance, to_lab, to_lab_with};
    use crate::color::{Lab, Normalization, Srgb};
    use crate::distance::JUST_NOTICEABLE_DIFFERENCE;

    /// Sparse walk over the sRGB cube, including both ends of every axis.
    fn gamut_sample(step: usize) -> Vec<Srgb> {
        let axis: Vec<u8> = (0..=255u8).step_by(step).chain([255]).collect();
        let mut colors = Vec::new();
        for &r in &axis {
            for &g in &axis {
                for &b in &axis {
                    colors.push(Srgb::new(r, g, b));
                }
            }
        }
        colors
    }

    // ========================================================================
    // Identity and symmetry
    // ========================================================================

    /// If this breaks, it means: some branch of CIEDE2000 (hue wrap, neutral
    /// fallback, rotation term) yields a non-zero value for identical
    /// inputs, so exact color matches stop being found at epsilon 0.
    #[test]
    fn test_self_distance_is_zero_across_gamut() {
        for color in gamut_sample(15) {
            let lab = to_lab(color);
            let d = perceptual_distance(lab, lab);
            assert!(d < 1e-9, "self-distance of {color} is {d}");
        }
    }

    /// If this breaks, it means: argument order leaks into the result, so
    /// whether a candidate matches depends on which side the reference is.
    #[test]
    fn test_near_symmetry_across_gamut() {
        let colors = gamut_sample(51);
        let labs: Vec<Lab> = colors.iter().map(|&c| to_lab(c)).collect();
        for (i, &a) in labs.iter().enumerate() {
            for (j, &b) in labs.iter().enumerate() {
                let forward = perceptual_distance(a, b);
                let backward = perceptual_distance(b, a);
                assert!(
                    (forward - backward).abs() < 1e-6,
                    "asymmetric for {} / {}: {forward} vs {backward}",
                    colors[i],
                    colors[j]
                );
            }
        }
    }

    /// If this breaks, it means: a NaN or negative value escapes the
    /// formula (typically sqrt of a negative from the RT cross term, or
    /// atan of 0/0 in the hue angle).
    #[test]
    fn test_distance_finite_and_non_negative() {
        let colors = gamut_sample(51);
        for &a in &colors {
            for &b in &colors {
                let d = perceptual_distance(to_lab(a), to_lab(b));
                assert!(d.is_finite() && d >= 0.0, "{a} / {b} gave {d}");
            }
        }
    }

    // ========================================================================
    // Conversion range and determinism
    // ========================================================================

    /// If this breaks, it means: the XYZ normalization or the CIE transfer
    /// has regressed (for example to the legacy `value / white - value`
    /// formula), pushing L* outside 0..=100 for ordinary sRGB colors.
    #[test]
    fn test_lightness_in_range_across_gamut() {
        for color in gamut_sample(15) {
            let lab = to_lab(color);
            assert!(
                lab.l > -1e-9 && lab.l < 100.0 + 1e-9,
                "L* of {color} is {}",
                lab.l
            );
            assert!(lab.a.abs() < 130.0 && lab.b.abs() < 130.0, "{color} -> {lab:?}");
        }
    }

    /// If this breaks, it means: a conversion step became stateful or
    /// approximate (for example a lookup table with interpolation).
    #[test]
    fn test_conversion_is_bit_deterministic() {
        for color in gamut_sample(85) {
            let first = to_lab(color);
            let second = to_lab(color);
            assert_eq!(first.l.to_bits(), second.l.to_bits());
            assert_eq!(first.a.to_bits(), second.a.to_bits());
            assert_eq!(first.b.to_bits(), second.b.to_bits());
        }
    }

    /// If this breaks, it means: the default normalization changed.
    #[test]
    fn test_standard_and_legacy_diverge() {
        let white = Srgb::new(255, 255, 255);
        let standard = to_lab_with(white, Normalization::Standard);
        let legacy = to_lab_with(white, Normalization::Legacy);
        assert!((standard.l - 100.0).abs() < 1e-9);
        assert!(legacy.l < -80_000.0);
    }

    // ========================================================================
    // Threshold semantics
    // ========================================================================

    /// If this breaks, it means: raising the threshold dropped a match,
    /// which would make search results depend non-monotonically on epsilon.
    #[test]
    fn test_threshold_matches_monotonic() {
        let reference = to_lab(parse_color("#336699").unwrap());
        let candidates = gamut_sample(51);
        let matches_at = |epsilon: f64| -> Vec<Srgb> {
            candidates
                .iter()
                .copied()
                .filter(|&c| perceptual_distance(reference, to_lab(c)) <= epsilon)
                .collect()
        };

        let mut previous = matches_at(0.0);
        for epsilon in [0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 150.0] {
            let current = matches_at(epsilon);
            for color in &previous {
                assert!(
                    current.contains(color),
                    "{color} matched below {epsilon} but not at {epsilon}"
                );
            }
            assert!(current.len() >= previous.len());
            previous = current;
        }
        assert_eq!(previous.len(), candidates.len());
    }

    /// If this breaks, it means: the perceptual ordering is off. One 8-bit
    /// step must be invisible, a clearly different shade must not be.
    #[test]
    fn test_just_noticeable_calibration() {
        let base = to_lab(parse_color("#336699").unwrap());
        let one_step = to_lab(parse_color("#336698").unwrap());
        let lighter = to_lab(parse_color("#6699CC").unwrap());

        assert!(perceptual_distance(base, one_step) < JUST_NOTICEABLE_DIFFERENCE);
        assert!(perceptual_distance(base, lighter) > 10.0 * JUST_NOTICEABLE_DIFFERENCE);
    }
}
