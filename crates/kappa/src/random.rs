//! Random stress–strain polylines for benchmarks and stress tests.
//!
//! Model
//! - Keypoints: `(0, 0)` plus `keypoints − 1` points drawn uniformly from
//!   `[eps_min, eps_max] × [sig_min, sig_max]`, sorted by strain.
//! - The keypoint polyline is resampled at `points` evenly spaced strains
//!   between its first and last strain by linear interpolation, which gives
//!   dense, sorted input of a controllable size.
//! - Determinism: one `StdRng` seeded from `seed`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::points::Points;
use crate::prep::{interpolate, PrepError};
use crate::timeslice::linspace;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GenError {
    #[error("eps_min and sig_min must be > 0 (got {eps_min}, {sig_min})")]
    NonPositiveMin { eps_min: f64, sig_min: f64 },
    #[error("empty range [{lo}, {hi}]")]
    EmptyRange { lo: f64, hi: f64 },
    #[error("range [{lo}, {hi}] is not finite")]
    NonFiniteRange { lo: f64, hi: f64 },
    #[error("need at least 2 keypoints and 2 samples (got {keypoints}, {points})")]
    TooFew { keypoints: usize, points: usize },
    #[error(transparent)]
    Resample(#[from] PrepError),
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolylineCfg {
    /// Number of resampled vertices in the output.
    pub points: usize,
    /// Number of keypoints including the origin.
    pub keypoints: usize,
    pub eps_min: f64,
    pub eps_max: f64,
    pub sig_min: f64,
    pub sig_max: f64,
}

impl Default for PolylineCfg {
    fn default() -> Self {
        Self {
            points: 20_000,
            keypoints: 6,
            eps_min: 0.1,
            eps_max: 1000.0,
            sig_min: 0.1,
            sig_max: 100_000.0,
        }
    }
}

impl PolylineCfg {
    fn validate(&self) -> Result<(), GenError> {
        if !(self.eps_min > 0.0 && self.sig_min > 0.0) {
            return Err(GenError::NonPositiveMin {
                eps_min: self.eps_min,
                sig_min: self.sig_min,
            });
        }
        if self.keypoints < 2 || self.points < 2 {
            return Err(GenError::TooFew {
                keypoints: self.keypoints,
                points: self.points,
            });
        }
        for (lo, hi) in [(self.eps_min, self.eps_max), (self.sig_min, self.sig_max)] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(GenError::NonFiniteRange { lo, hi });
            }
            if !(lo <= hi) {
                return Err(GenError::EmptyRange { lo, hi });
            }
        }
        Ok(())
    }
}

/// Draw the keypoints only (sorted, starting at the origin).
pub fn draw_keypoints(cfg: &PolylineCfg, seed: u64) -> Result<Points, GenError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut kp: Vec<(f64, f64)> = Vec::with_capacity(cfg.keypoints);
    kp.push((0.0, 0.0));
    for _ in 1..cfg.keypoints {
        let eps = rng.gen_range(cfg.eps_min..=cfg.eps_max);
        let sig = rng.gen_range(cfg.sig_min..=cfg.sig_max);
        kp.push((eps, sig));
    }
    kp.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    Ok(Points::from_pairs(kp))
}

/// Draw a dense random polyline with `cfg.points` sorted vertices.
pub fn draw_polyline(cfg: &PolylineCfg, seed: u64) -> Result<Points, GenError> {
    let kp = draw_keypoints(cfg, seed)?;
    let lo = kp.epsilon()[0];
    let hi = kp.epsilon()[kp.len() - 1];
    let mut out = Points::with_capacity(cfg.points);
    for eps in linspace(lo, hi, cfg.points) {
        out.push(eps, interpolate(eps, &kp)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> PolylineCfg {
        PolylineCfg {
            points: 500,
            keypoints: 5,
            ..PolylineCfg::default()
        }
    }

    #[test]
    fn keypoints_start_at_origin_and_are_sorted() {
        let kp = draw_keypoints(&small(), 3).unwrap();
        assert_eq!(kp.len(), 5);
        assert_eq!(kp.first(), Some((0.0, 0.0)));
        assert!(kp.is_sorted());
        for (e, s) in kp.iter().skip(1) {
            assert!((0.1..=1000.0).contains(&e));
            assert!((0.1..=100_000.0).contains(&s));
        }
    }

    #[test]
    fn polyline_is_dense_sorted_and_deterministic() {
        let a = draw_polyline(&small(), 11).unwrap();
        let b = draw_polyline(&small(), 11).unwrap();
        let c = draw_polyline(&small(), 12).unwrap();
        assert_eq!(a.len(), 500);
        assert!(a.is_sorted());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.first(), Some((0.0, 0.0)));
    }

    #[test]
    fn invalid_configs_rejected() {
        let cfg = PolylineCfg {
            eps_min: 0.0,
            ..small()
        };
        assert!(matches!(
            draw_polyline(&cfg, 0),
            Err(GenError::NonPositiveMin { .. })
        ));
        let cfg = PolylineCfg {
            keypoints: 1,
            ..small()
        };
        assert!(matches!(draw_polyline(&cfg, 0), Err(GenError::TooFew { .. })));
        let cfg = PolylineCfg {
            sig_max: 0.01,
            ..small()
        };
        assert!(matches!(
            draw_polyline(&cfg, 0),
            Err(GenError::EmptyRange { .. })
        ));
    }

    #[test]
    fn infinite_bounds_rejected_before_sampling() {
        let cfg = PolylineCfg {
            eps_max: f64::INFINITY,
            ..small()
        };
        assert!(matches!(
            draw_keypoints(&cfg, 0),
            Err(GenError::NonFiniteRange { .. })
        ));
        let cfg = PolylineCfg {
            sig_max: f64::INFINITY,
            ..small()
        };
        assert!(matches!(
            draw_polyline(&cfg, 0),
            Err(GenError::NonFiniteRange { .. })
        ));
        let cfg = PolylineCfg {
            eps_max: f64::NAN,
            ..small()
        };
        assert!(draw_polyline(&cfg, 0).is_err());
    }
}
