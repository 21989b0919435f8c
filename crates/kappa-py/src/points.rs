//! The `Points` class and polyline preprocessing.

use crate::common::{map_gen_err, map_points_err, map_prep_err};
use kappa::api::{draw_polyline, prep, try_prep, Points, PolylineCfg};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

/// Strain/stress series with equal-length `epsilon` and `sigma`.
#[pyclass(name = "Points", module = "kappa_native")]
#[derive(Clone, Debug, Default)]
pub struct PyPoints {
    pub(crate) inner: Points,
}

impl From<Points> for PyPoints {
    fn from(inner: Points) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyPoints {
    /// `Points()`, `Points(n)` (empty, room for n vertices) or `Points(epsilon, sigma)`.
    #[new]
    #[pyo3(signature = (epsilon=None, sigma=None))]
    fn new(epsilon: Option<&PyAny>, sigma: Option<Vec<f64>>) -> PyResult<Self> {
        let inner = match (epsilon, sigma) {
            (None, None) => Points::new(),
            (Some(arg), None) => {
                let n: usize = arg.extract()?;
                Points::with_capacity(n)
            }
            (Some(arg), Some(sigma)) => {
                Points::from_vecs(arg.extract()?, sigma).map_err(map_points_err)?
            }
            (None, Some(_)) => {
                return Err(PyValueError::new_err("sigma given without epsilon"));
            }
        };
        Ok(inner.into())
    }

    fn size(&self) -> usize {
        self.inner.len()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn add_point(&mut self, eps: f64, sig: f64) {
        self.inner.push(eps, sig);
    }

    /// Insert `epsilon[start:end]`, `sigma[start:end]` at the end.
    fn insert_range(
        &mut self,
        epsilon: Vec<f64>,
        sigma: Vec<f64>,
        start: usize,
        end: usize,
    ) -> PyResult<()> {
        self.inner
            .insert_range(&epsilon, &sigma, start..end)
            .map_err(map_points_err)
    }

    fn change_point(&mut self, index: usize, eps: f64, sig: f64) -> PyResult<()> {
        self.inner
            .change_point(index, eps, sig)
            .map_err(map_points_err)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn get_epsilon(&self) -> Vec<f64> {
        self.inner.epsilon().to_vec()
    }

    fn get_sigma(&self) -> Vec<f64> {
        self.inner.sigma().to_vec()
    }

    fn is_sorted(&self) -> bool {
        self.inner.is_sorted()
    }

    fn __getitem__(&self, index: isize) -> PyResult<(f64, f64)> {
        let len = self.inner.len() as isize;
        let i = if index < 0 { index + len } else { index };
        usize::try_from(i)
            .ok()
            .and_then(|i| self.inner.get(i))
            .ok_or_else(|| PyIndexError::new_err(format!("index {index} out of range")))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        match (self.inner.first(), self.inner.last()) {
            (Some(a), Some(b)) => format!(
                "Points(len={}, first={:?}, last={:?})",
                self.inner.len(),
                a,
                b
            ),
            _ => "Points(len=0)".to_string(),
        }
    }
}

/// Trim `lm` at `eps_cut` and close it; failures give an empty series.
#[pyfunction]
pub fn preprocess(eps_cut: f64, lm: &PyPoints) -> PyPoints {
    prep(eps_cut, &lm.inner).into()
}

/// Like `preprocess` but raises `ValueError` instead of returning empty.
#[pyfunction]
pub fn try_preprocess(eps_cut: f64, lm: &PyPoints) -> PyResult<PyPoints> {
    try_prep(eps_cut, &lm.inner)
        .map(PyPoints::from)
        .map_err(map_prep_err)
}

/// Random sorted polyline through `keypoints` random vertices.
#[pyfunction]
#[pyo3(signature = (points=20000, keypoints=6, seed=0))]
pub fn random_polyline(points: usize, keypoints: usize, seed: u64) -> PyResult<PyPoints> {
    let cfg = PolylineCfg {
        points,
        keypoints,
        ..PolylineCfg::default()
    };
    draw_polyline(&cfg, seed)
        .map(PyPoints::from)
        .map_err(map_gen_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPoints>()?;
    m.add_function(wrap_pyfunction!(preprocess, m)?)?;
    m.add_function(wrap_pyfunction!(try_preprocess, m)?)?;
    m.add_function(wrap_pyfunction!(random_polyline, m)?)?;
    Ok(())
}
