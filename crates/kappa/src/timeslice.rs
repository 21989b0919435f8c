//! Batch evaluation over many independent cut strains ("timeslices").
//!
//! Every slice is preprocessed and integrated on its own; there is no state
//! shared between slices except the read-only source polyline. The maps run
//! on rayon's pool and keep the output index-aligned with the input, so the
//! numbers are the same as a sequential loop element by element.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::points::Points;
use crate::prep::prep_with;
use crate::report::{Report, Traced};
use crate::shoelace::{area, area_and_moment, moment};

/// One evaluated cut.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub cut: f64,
    pub area: f64,
    pub moment: f64,
}

/// `n` evenly spaced values from `lo` to `hi` inclusive.
///
/// `n == 1` yields `[lo]`, `n == 0` an empty vector. The last value is `hi`
/// exactly, so a sweep up to a curve's last strain never leaves its domain.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|t| if t == n - 1 { hi } else { lo + step * t as f64 })
                .collect()
        }
    }
}

/// Closed polygon per cut; cuts outside the polyline give empty polygons.
pub fn prep_timeslices(cuts: &[f64], source: &Points) -> Vec<Points> {
    prep_timeslices_with(cuts, source, &Traced)
}

pub fn prep_timeslices_with(cuts: &[f64], source: &Points, sink: &dyn Report) -> Vec<Points> {
    cuts.par_iter()
        .map(|&cut| prep_with(cut, source, sink))
        .collect()
}

/// Area of every slice.
pub fn compute_area_timeslices(slices: &[Points]) -> Vec<f64> {
    slices.par_iter().map(area).collect()
}

/// First moment of every slice.
pub fn compute_momentum_timeslices(slices: &[Points]) -> Vec<f64> {
    slices.par_iter().map(moment).collect()
}

/// `(area, moment)` of every slice.
pub fn compute_area_momentum_timeslices(slices: &[Points]) -> Vec<(f64, f64)> {
    slices.par_iter().map(area_and_moment).collect()
}

/// Preprocess and integrate every cut of `source` in one pass.
pub fn sweep(cuts: &[f64], source: &Points) -> Vec<Slice> {
    sweep_with(cuts, source, &Traced)
}

pub fn sweep_with(cuts: &[f64], source: &Points, sink: &dyn Report) -> Vec<Slice> {
    cuts.par_iter()
        .map(|&cut| {
            let (area, moment) = area_and_moment(&prep_with(cut, source, sink));
            Slice { cut, area, moment }
        })
        .collect()
}
