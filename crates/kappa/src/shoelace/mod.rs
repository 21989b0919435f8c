//! Shoelace integrals over a closed stress–strain polygon.
//!
//! For vertices `(x_i, y_i)`, `i = 0..n`, with per-edge cross term
//! `c_i = x_i·y_{i+1} − x_{i+1}·y_i`:
//!
//! - area   `= |Σ_{i<n-1} c_i + (x_{n-1}·y_0 − x_0·y_{n-1})| / 2`
//! - moment `= |Σ_{i<n-1} (x_i + x_{i+1})·c_i| / 6` (first moment about the
//!   stress axis; no wraparound term, the polygon from `prep` closes on its
//!   first vertex already)
//!
//! Polygons with fewer than 3 vertices are degenerate and integrate to zero.
//!
//! Scalar routines share `edge_cross` and accumulate in index order, so
//! `area_and_moment(p) == (area(p), moment(p))` holds bit for bit. The lane
//! kernel (`lanes`) reorders the summation and agrees within `cfg::LANE_REL_TOL`.

mod lanes;

pub use lanes::{area_and_moment_lanes, area_and_moment_simd, area_simd, moment_simd};

use crate::points::Points;

#[inline(always)]
pub(crate) fn edge_cross(x: &[f64], y: &[f64], i: usize) -> f64 {
    x[i] * y[i + 1] - x[i + 1] * y[i]
}

#[inline(always)]
pub(crate) fn wrap_cross(x: &[f64], y: &[f64]) -> f64 {
    let last = x.len() - 1;
    x[last] * y[0] - x[0] * y[last]
}

/// Absolute polygon area.
pub fn area(points: &Points) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let (x, y) = (points.epsilon(), points.sigma());
    let mut acc = 0.0;
    for i in 0..n - 1 {
        acc += edge_cross(x, y, i);
    }
    acc += wrap_cross(x, y);
    acc.abs() * 0.5
}

/// Absolute first moment about the stress axis.
pub fn moment(points: &Points) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let (x, y) = (points.epsilon(), points.sigma());
    let mut acc = 0.0;
    for i in 0..n - 1 {
        acc += (x[i] + x[i + 1]) * edge_cross(x, y, i);
    }
    acc.abs() / 6.0
}

/// `(area, moment)` in a single pass.
pub fn area_and_moment(points: &Points) -> (f64, f64) {
    let n = points.len();
    if n < 3 {
        return (0.0, 0.0);
    }
    let (x, y) = (points.epsilon(), points.sigma());
    let mut acc_a = 0.0;
    let mut acc_m = 0.0;
    for i in 0..n - 1 {
        let c = edge_cross(x, y, i);
        acc_a += c;
        acc_m += (x[i] + x[i + 1]) * c;
    }
    acc_a += wrap_cross(x, y);
    (acc_a.abs() * 0.5, acc_m.abs() / 6.0)
}

/// Centroid strain `moment / area`; `None` for a zero-area polygon.
pub fn centroid(points: &Points) -> Option<f64> {
    let (a, m) = area_and_moment(points);
    if a == 0.0 {
        None
    } else {
        Some(m / a)
    }
}
