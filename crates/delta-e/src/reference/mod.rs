//! Reference color sets
//!
//! A [`ReferenceSet`] holds the colors a search is looking for, with their
//! L*a*b* values precomputed.

mod reference_set;

pub use reference_set::ReferenceSet;
