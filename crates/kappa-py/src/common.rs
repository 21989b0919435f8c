use kappa::api::{GenError, PointsError, PrepError, SectionError};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::PyErr;

pub fn map_points_err(err: PointsError) -> PyErr {
    match err {
        PointsError::IndexOutOfBounds { .. } | PointsError::RangeOutOfBounds { .. } => {
            PyIndexError::new_err(err.to_string())
        }
        PointsError::LengthMismatch { .. } => PyValueError::new_err(err.to_string()),
    }
}

pub fn map_prep_err(err: PrepError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_section_err(err: SectionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_gen_err(err: GenError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
