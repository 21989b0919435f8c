//! PyO3 bindings for the `kappa` core.
//!
//! Notes
//! - Bindings stay thin: curves cross the boundary as the `Points` class or as
//!   plain float lists; results are floats, tuples or small dicts.
//! - Everything goes through `kappa::api`; no numerics live here.

use pyo3::prelude::*;

mod common;
mod points;
mod section;
mod shoelace;

#[pymodule]
fn kappa_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", kappa::VERSION)?;
    points::register(m)?;
    shoelace::register(m)?;
    section::register(m)?;
    Ok(())
}
