//! Reference colors with nearest-color matching.

use std::collections::HashSet;

use crate::color::{Lab, LinearRgb, Normalization, Srgb, Xyz};
use crate::distance::ciede2000;
use crate::error::ReferenceError;

/// A set of reference colors searched for perceptually close candidates.
///
/// Each entry's L*a*b* value is computed once at construction, so matching a
/// candidate costs one conversion plus one CIEDE2000 evaluation per entry.
///
/// # Example
///
/// ```
/// use delta_e::{ReferenceSet, Srgb};
///
/// let refs = ReferenceSet::from_hex(&["#FF0000", "#0000FF"]).unwrap();
/// let (idx, dist) = refs.nearest_srgb(Srgb::new(250, 5, 5));
/// assert_eq!(idx, 0);
/// assert!(dist < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    srgb: Vec<Srgb>,
    lab: Vec<Lab>,
    normalization: Normalization,
}

impl ReferenceSet {
    /// Create a reference set using [`Normalization::Standard`].
    ///
    /// # Errors
    ///
    /// - [`ReferenceError::Empty`] if `colors` is empty
    /// - [`ReferenceError::DuplicateColor`] if a color appears twice
    pub fn new(colors: &[Srgb]) -> Result<Self, ReferenceError> {
        Self::with_normalization(colors, Normalization::Standard)
    }

    /// Create a reference set with an explicit XYZ normalization.
    ///
    /// Candidates passed to [`nearest_srgb`](Self::nearest_srgb) are
    /// converted with the same normalization.
    pub fn with_normalization(
        colors: &[Srgb],
        normalization: Normalization,
    ) -> Result<Self, ReferenceError> {
        if colors.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(ReferenceError::DuplicateColor { index });
            }
        }

        let lab = colors
            .iter()
            .map(|&c| Xyz::from(LinearRgb::from(c)).to_lab(normalization))
            .collect();

        Ok(Self {
            srgb: colors.to_vec(),
            lab,
            normalization,
        })
    }

    /// Create a reference set from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::ParseColor`] if any string is not a valid
    /// hex color, or the validation errors of [`new`](Self::new).
    pub fn from_hex(colors: &[&str]) -> Result<Self, ReferenceError> {
        let srgb = colors
            .iter()
            .map(|s| s.parse::<Srgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&srgb)
    }

    /// Returns the number of reference colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Always false; construction rejects empty sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// The sRGB value of entry `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.srgb[idx]
    }

    /// The L*a*b* value of entry `idx`.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// All reference colors, in construction order.
    pub fn colors(&self) -> &[Srgb] {
        &self.srgb
    }

    /// The normalization every entry was converted with.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Find the entry closest to `color` by CIEDE2000.
    ///
    /// Returns `(index, distance)`. Ties go to the earliest entry.
    pub fn nearest(&self, color: Lab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, &reference) in self.lab.iter().enumerate() {
            let dist = ciede2000(reference, color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Convert `color` with this set's normalization and find the nearest entry.
    pub fn nearest_srgb(&self, color: Srgb) -> (usize, f64) {
        let lab = Xyz::from(LinearRgb::from(color)).to_lab(self.normalization);
        self.nearest(lab)
    }
}
