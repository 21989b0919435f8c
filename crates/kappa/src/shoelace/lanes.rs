//! Lane-parallel shoelace kernel.
//!
//! Edges are processed `L` at a time as `SVector<f64, L>` lanes: two
//! overlapping windows `x[i..i+L]`, `x[i+1..i+1+L]` (same for `y`) give `L`
//! cross terms per step. Lane sums are reduced once at the end, the leftover
//! `< L` edges and the wraparound term go through the scalar path.
//!
//! The loop only runs while `i + L <= n - 1`, so the shifted window ends at
//! index `n - 1` at most.
//!
//! `L` is a tuning knob, not a semantic one. Any `L >= 1` gives the same
//! result up to summation order; `L = 0` falls back to the scalar routine.

use nalgebra::SVector;

use super::{area_and_moment, edge_cross, wrap_cross};
use crate::cfg::LANES;
use crate::points::Points;

/// `(area, moment)` with an `L`-wide lane reduction.
pub fn area_and_moment_lanes<const L: usize>(points: &Points) -> (f64, f64) {
    let n = points.len();
    if n < 3 {
        return (0.0, 0.0);
    }
    if L == 0 {
        return area_and_moment(points);
    }
    let (x, y) = (points.epsilon(), points.sigma());
    let edges = n - 1;

    let mut acc_a = SVector::<f64, L>::zeros();
    let mut acc_m = SVector::<f64, L>::zeros();
    let mut i = 0usize;
    while i + L <= edges {
        let x0 = SVector::<f64, L>::from_column_slice(&x[i..i + L]);
        let x1 = SVector::<f64, L>::from_column_slice(&x[i + 1..i + 1 + L]);
        let y0 = SVector::<f64, L>::from_column_slice(&y[i..i + L]);
        let y1 = SVector::<f64, L>::from_column_slice(&y[i + 1..i + 1 + L]);
        let cross = x0.component_mul(&y1) - x1.component_mul(&y0);
        acc_m += (x0 + x1).component_mul(&cross);
        acc_a += cross;
        i += L;
    }

    let mut area = acc_a.sum();
    let mut moment = acc_m.sum();
    for k in i..edges {
        let c = edge_cross(x, y, k);
        area += c;
        moment += (x[k] + x[k + 1]) * c;
    }
    area += wrap_cross(x, y);
    (area.abs() * 0.5, moment.abs() / 6.0)
}

/// Lane kernel at the default width `cfg::LANES`.
#[inline]
pub fn area_and_moment_simd(points: &Points) -> (f64, f64) {
    area_and_moment_lanes::<LANES>(points)
}

#[inline]
pub fn area_simd(points: &Points) -> f64 {
    area_and_moment_simd(points).0
}

#[inline]
pub fn moment_simd(points: &Points) -> f64 {
    area_and_moment_simd(points).1
}
