//! `SectionCal`: force balance of a rectangular section.
//!
//! The class owns its geometry and both face curves, and calls the free
//! `kappa::api::evaluate` so it needs no borrowed state across the boundary.

use crate::common::map_section_err;
use crate::points::PyPoints;
use kappa::api::{evaluate, CrossSection, SectionCfg, SectionState};
use pyo3::prelude::*;
use pyo3::types::PyDict;

#[pyclass(name = "SectionCal", module = "kappa_native")]
pub struct PySection {
    cs: CrossSection,
    cc: PyPoints,
    ft: PyPoints,
    cfg: SectionCfg,
}

impl PySection {
    fn state(&self, eps_ca: f64, kappa: f64) -> PyResult<SectionState> {
        evaluate(&self.cs, &self.cc.inner, &self.ft.inner, self.cfg, eps_ca, kappa)
            .map_err(map_section_err)
    }
}

#[pymethods]
impl PySection {
    #[new]
    #[pyo3(signature = (height, cc, ft, length=None, width=None, modulus=None, eps_ca_max=None))]
    fn new(
        height: f64,
        cc: PyPoints,
        ft: PyPoints,
        length: Option<f64>,
        width: Option<f64>,
        modulus: Option<f64>,
        eps_ca_max: Option<f64>,
    ) -> Self {
        let mut cs = CrossSection::new(height);
        cs.length = length.unwrap_or(cs.length);
        cs.width = width.unwrap_or(cs.width);
        cs.modulus = modulus.unwrap_or(cs.modulus);
        Self {
            cs,
            cc,
            ft,
            cfg: SectionCfg { eps_ca_max },
        }
    }

    #[getter]
    fn height(&self) -> f64 {
        self.cs.height
    }

    #[getter]
    fn inertia(&self) -> f64 {
        self.cs.inertia()
    }

    #[getter]
    fn section_modulus(&self) -> f64 {
        self.cs.section_modulus()
    }

    /// `f_cc - f_ft` at `(eps_ca, kappa)`.
    fn forceresidual(&self, eps_ca: f64, kappa: f64) -> PyResult<f64> {
        self.state(eps_ca, kappa).map(|s| s.residual())
    }

    fn moment(&self, eps_ca: f64, kappa: f64) -> PyResult<f64> {
        self.state(eps_ca, kappa).map(|s| s.m_ca)
    }

    /// All intermediate quantities of one evaluation as a dict.
    fn eval<'py>(&self, py: Python<'py>, eps_ca: f64, kappa: f64) -> PyResult<&'py PyDict> {
        let s = self.state(eps_ca, kappa)?;
        let d = PyDict::new(py);
        d.set_item("eps_ca", s.eps_ca)?;
        d.set_item("kappa", s.kappa)?;
        d.set_item("eps_cc", s.eps_cc)?;
        d.set_item("eps_ft", s.eps_ft)?;
        d.set_item("h_cc", s.h_cc)?;
        d.set_item("h_ft", s.h_ft)?;
        d.set_item("jac_cc", s.jac_cc)?;
        d.set_item("jac_ft", s.jac_ft)?;
        d.set_item("m0_cc", s.m0_cc)?;
        d.set_item("m1_cc", s.m1_cc)?;
        d.set_item("m0_ft", s.m0_ft)?;
        d.set_item("m1_ft", s.m1_ft)?;
        d.set_item("f_cc", s.f_cc)?;
        d.set_item("f_ft", s.f_ft)?;
        d.set_item("m_ca", s.m_ca)?;
        d.set_item("force_gap", s.force_gap())?;
        d.set_item("z_cc_na", s.z_cc_na())?;
        d.set_item("z_ft_na", s.z_ft_na())?;
        d.set_item("z_cc_ca", s.z_cc_ca(&self.cs))?;
        d.set_item("z_ft_ca", s.z_ft_ca(&self.cs))?;
        d.set_item("z_na_ca", s.z_na_ca(&self.cs))?;
        Ok(d)
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PySection>()?;
    Ok(())
}
