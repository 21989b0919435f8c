//! Integrals of closed polygons, single and batched.

use crate::points::PyPoints;
use kappa::api::{
    area, area_and_moment, area_and_moment_simd, compute_area_timeslices,
    compute_momentum_timeslices, linspace, moment, sweep, Points,
};
use pyo3::prelude::*;

#[pyfunction]
pub fn cal_area(points: &PyPoints) -> f64 {
    area(&points.inner)
}

#[pyfunction]
pub fn cal_momentum(points: &PyPoints) -> f64 {
    moment(&points.inner)
}

#[pyfunction]
pub fn cal_area_momentum(points: &PyPoints) -> (f64, f64) {
    area_and_moment(&points.inner)
}

#[pyfunction]
pub fn cal_area_momentum_simd(points: &PyPoints) -> (f64, f64) {
    area_and_moment_simd(&points.inner)
}

fn unwrap_slices(slices: Vec<PyPoints>) -> Vec<Points> {
    slices.into_iter().map(|p| p.inner).collect()
}

/// Area of every polygon; runs without the GIL.
#[pyfunction]
pub fn area_timeslices(py: Python<'_>, slices: Vec<PyPoints>) -> Vec<f64> {
    let slices = unwrap_slices(slices);
    py.allow_threads(|| compute_area_timeslices(&slices))
}

/// First moment of every polygon; runs without the GIL.
#[pyfunction]
pub fn momentum_timeslices(py: Python<'_>, slices: Vec<PyPoints>) -> Vec<f64> {
    let slices = unwrap_slices(slices);
    py.allow_threads(|| compute_momentum_timeslices(&slices))
}

/// `(cut, area, moment)` for `n` cuts evenly spaced over `[lo, hi]`.
#[pyfunction]
pub fn sweep_linspace(
    py: Python<'_>,
    lm: &PyPoints,
    lo: f64,
    hi: f64,
    n: usize,
) -> Vec<(f64, f64, f64)> {
    let source = lm.inner.clone();
    py.allow_threads(|| {
        sweep(&linspace(lo, hi, n), &source)
            .into_iter()
            .map(|s| (s.cut, s.area, s.moment))
            .collect()
    })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cal_area, m)?)?;
    m.add_function(wrap_pyfunction!(cal_momentum, m)?)?;
    m.add_function(wrap_pyfunction!(cal_area_momentum, m)?)?;
    m.add_function(wrap_pyfunction!(cal_area_momentum_simd, m)?)?;
    m.add_function(wrap_pyfunction!(area_timeslices, m)?)?;
    m.add_function(wrap_pyfunction!(momentum_timeslices, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_linspace, m)?)?;
    Ok(())
}
