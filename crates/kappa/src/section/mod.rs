//! Force balance of a cross-section at one curvature.
//!
//! Kinematics (plane sections, linear strain over depth):
//! - face strains `eps_cc = |eps_ca − κ·h_u|`, `eps_ft = |eps_ca + κ·h_d|`
//! - depths of the compression/tension zones
//!   `h_cc = |eps_cc / (eps_cc + eps_ft) · h|`, `h_ft` alike
//! - jacobians `jac = h_zone / eps_face` map strain-domain integrals to depth
//!
//! Each face's stress–strain polyline is cut at the face strain (`prep`) and
//! integrated (`shoelace`); forces are `area · jac`, the moment about the
//! centroid axis is `moment_cc · jac_cc² + moment_ft · jac_ft²`.
//!
//! Zero face strain
//! - With `eps_face > 0`, `h_zone / eps_face == h / (eps_cc + eps_ft)`. A face
//!   strain of exactly zero uses that limit instead of dividing 0/0; the face
//!   then contributes nothing since its polygon has no area.
//! - Both strains zero (no strain anywhere) is `SectionError::Degenerate`.
//! - NaN or infinite `eps_ca`/`κ` is `SectionError::NonFinite`, checked before
//!   clipping.
//!
//! No root-finding happens here: `forceresidual` is the objective an external
//! solver drives to zero over `eps_ca` for a fixed `κ`.

mod cross;

pub use cross::CrossSection;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::points::Points;
use crate::prep::{try_prep, PrepError};
use crate::shoelace::area_and_moment;

/// Which side of the neutral axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Compression,
    Tension,
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Compression => f.write_str("compression"),
            Face::Tension => f.write_str("tension"),
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SectionError {
    #[error("strain state is not finite (eps_ca={eps_ca}, kappa={kappa})")]
    NonFinite { eps_ca: f64, kappa: f64 },
    #[error("no strain at either face (eps_ca={eps_ca}, kappa={kappa})")]
    Degenerate { eps_ca: f64, kappa: f64 },
    #[error("{face} face: {source}")]
    Prep { face: Face, source: PrepError },
}

/// Evaluation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCfg {
    /// Clip the reference strain to `[0, eps_ca_max]` before evaluating.
    #[serde(default)]
    pub eps_ca_max: Option<f64>,
}

impl SectionCfg {
    #[inline]
    fn clip(&self, eps_ca: f64) -> f64 {
        match self.eps_ca_max {
            Some(max) => eps_ca.max(0.0).min(max),
            None => eps_ca,
        }
    }
}

/// Everything one `(eps_ca, κ)` evaluation produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionState {
    pub eps_ca: f64,
    pub kappa: f64,
    pub eps_cc: f64,
    pub eps_ft: f64,
    pub h_cc: f64,
    pub h_ft: f64,
    pub jac_cc: f64,
    pub jac_ft: f64,
    /// Strain-domain area / first moment of the trimmed compression curve.
    pub m0_cc: f64,
    pub m1_cc: f64,
    pub m0_ft: f64,
    pub m1_ft: f64,
    pub f_cc: f64,
    pub f_ft: f64,
    pub m_ca: f64,
}

impl SectionState {
    /// `f_cc − f_ft`; zero at force equilibrium.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.f_cc - self.f_ft
    }

    #[inline]
    pub fn force_gap(&self) -> f64 {
        (self.f_ft - self.f_cc).abs()
    }

    /// Lever arm of the compression resultant, measured from the neutral axis.
    pub fn z_cc_na(&self) -> Option<f64> {
        (self.m0_cc != 0.0).then(|| self.m1_cc / self.m0_cc * self.jac_cc)
    }

    /// Lever arm of the tension resultant, measured from the neutral axis.
    pub fn z_ft_na(&self) -> Option<f64> {
        (self.m0_ft != 0.0).then(|| self.m1_ft / self.m0_ft * self.jac_ft)
    }

    /// Compression lever arm from the centroid axis.
    pub fn z_cc_ca(&self, cs: &CrossSection) -> Option<f64> {
        self.z_cc_na().map(|z| cs.h_u() - (self.h_cc - z))
    }

    /// Tension lever arm from the centroid axis.
    pub fn z_ft_ca(&self, cs: &CrossSection) -> Option<f64> {
        self.z_ft_na().map(|z| cs.h_d() - (self.h_ft - z))
    }

    /// Offset of the neutral axis from the centroid axis.
    #[inline]
    pub fn z_na_ca(&self, cs: &CrossSection) -> f64 {
        cs.h_d() - self.h_ft
    }
}

/// Evaluate one `(eps_ca, κ)` pair without building an evaluator.
pub fn evaluate(
    cs: &CrossSection,
    cc: &Points,
    ft: &Points,
    cfg: SectionCfg,
    eps_ca: f64,
    kappa: f64,
) -> Result<SectionState, SectionError> {
    if !(eps_ca.is_finite() && kappa.is_finite()) {
        return Err(SectionError::NonFinite { eps_ca, kappa });
    }
    let eps_ca = cfg.clip(eps_ca);
    let h = cs.height;

    let eps_cc = (eps_ca - kappa * cs.h_u()).abs();
    let eps_ft = (eps_ca + kappa * cs.h_d()).abs();
    let eps_dt = eps_cc + eps_ft;
    if !(eps_dt > 0.0) {
        return Err(SectionError::Degenerate { eps_ca, kappa });
    }

    let h_cc = (eps_cc / eps_dt * h).abs();
    let h_ft = (eps_ft / eps_dt * h).abs();
    let jac_cc = jacobian(h_cc, eps_cc, h, eps_dt);
    let jac_ft = jacobian(h_ft, eps_ft, h, eps_dt);

    let (m0_cc, m1_cc) = integrate(eps_cc, cc, Face::Compression)?;
    let (m0_ft, m1_ft) = integrate(eps_ft, ft, Face::Tension)?;

    Ok(SectionState {
        eps_ca,
        kappa,
        eps_cc,
        eps_ft,
        h_cc,
        h_ft,
        jac_cc,
        jac_ft,
        m0_cc,
        m1_cc,
        m0_ft,
        m1_ft,
        f_cc: m0_cc * jac_cc,
        f_ft: m0_ft * jac_ft,
        m_ca: m1_cc * jac_cc * jac_cc + m1_ft * jac_ft * jac_ft,
    })
}

#[inline]
fn jacobian(h_zone: f64, eps_face: f64, h: f64, eps_dt: f64) -> f64 {
    if eps_face > 0.0 {
        h_zone / eps_face
    } else {
        (h / eps_dt).abs()
    }
}

fn integrate(cut: f64, lm: &Points, face: Face) -> Result<(f64, f64), SectionError> {
    let polygon = try_prep(cut, lm).map_err(|source| SectionError::Prep { face, source })?;
    Ok(area_and_moment(&polygon))
}

/// Section evaluator over borrowed geometry and owned face curves.
///
/// The geometry reference must outlive the evaluator; each call recomputes
/// from scratch and has no side effects.
#[derive(Clone, Debug)]
pub struct SectionEvaluator<'a> {
    cs: &'a CrossSection,
    cc: Points,
    ft: Points,
    cfg: SectionCfg,
}

impl<'a> SectionEvaluator<'a> {
    pub fn new(cs: &'a CrossSection, cc: Points, ft: Points) -> Self {
        Self::with_cfg(cs, cc, ft, SectionCfg::default())
    }

    pub fn with_cfg(cs: &'a CrossSection, cc: Points, ft: Points, cfg: SectionCfg) -> Self {
        Self { cs, cc, ft, cfg }
    }

    #[inline]
    pub fn cross_section(&self) -> &CrossSection {
        self.cs
    }

    #[inline]
    pub fn compression(&self) -> &Points {
        &self.cc
    }

    #[inline]
    pub fn tension(&self) -> &Points {
        &self.ft
    }

    #[inline]
    pub fn cfg(&self) -> SectionCfg {
        self.cfg
    }

    pub fn eval(&self, eps_ca: f64, kappa: f64) -> Result<SectionState, SectionError> {
        evaluate(self.cs, &self.cc, &self.ft, self.cfg, eps_ca, kappa)
    }

    /// `f_cc − f_ft` at `(eps_ca, κ)`.
    pub fn forceresidual(&self, eps_ca: f64, kappa: f64) -> Result<f64, SectionError> {
        self.eval(eps_ca, kappa).map(|s| s.residual())
    }

    /// Moment about the centroid axis at `(eps_ca, κ)`.
    pub fn moment(&self, eps_ca: f64, kappa: f64) -> Result<f64, SectionError> {
        self.eval(eps_ca, kappa).map(|s| s.m_ca)
    }

    /// `eval` for many reference strains at one curvature, in parallel.
    pub fn eval_many(&self, eps_ca: &[f64], kappa: f64) -> Vec<Result<SectionState, SectionError>> {
        eps_ca.par_iter().map(|&e| self.eval(e, kappa)).collect()
    }
}
