//! Index-aligned strain/stress series.
//!
//! `Points` stores the two coordinates as separate contiguous `Vec<f64>`
//! (struct-of-arrays). The shoelace lane kernel reads both slices directly,
//! so keeping them apart avoids a gather step.
//!
//! Invariants:
//! - `epsilon.len() == sigma.len()` at all times. Every mutation that would
//!   break this is rejected and leaves the series unchanged.
//! - Strains are expected to be non-decreasing when the series is used as a
//!   polyline for `prep`; this is a caller precondition (`is_sorted`).

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::{Diagnostic, Report};

/// Rejected mutation of a `Points` series.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointsError {
    #[error("epsilon and sigma must have the same length (got {epsilon} and {sigma})")]
    LengthMismatch { epsilon: usize, sigma: usize },
    #[error("range {start}..{end} is out of bounds for source of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    #[error("index {index} is out of bounds for series of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Ordered polyline / polygon vertices `(epsilon_i, sigma_i)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoints")]
pub struct Points {
    epsilon: Vec<f64>,
    sigma: Vec<f64>,
}

#[derive(Deserialize)]
struct RawPoints {
    epsilon: Vec<f64>,
    sigma: Vec<f64>,
}

impl TryFrom<RawPoints> for Points {
    type Error = PointsError;

    fn try_from(raw: RawPoints) -> Result<Self, Self::Error> {
        Points::from_vecs(raw.epsilon, raw.sigma)
    }
}

impl Points {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty series with room for `n` vertices.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            epsilon: Vec::with_capacity(n),
            sigma: Vec::with_capacity(n),
        }
    }

    /// Take ownership of two equal-length sequences.
    pub fn from_vecs(epsilon: Vec<f64>, sigma: Vec<f64>) -> Result<Self, PointsError> {
        if epsilon.len() != sigma.len() {
            return Err(PointsError::LengthMismatch {
                epsilon: epsilon.len(),
                sigma: sigma.len(),
            });
        }
        Ok(Self { epsilon, sigma })
    }

    /// Lenient constructor: on length mismatch, reports to `sink` and returns
    /// an empty series.
    pub fn from_vecs_or_empty(epsilon: Vec<f64>, sigma: Vec<f64>, sink: &dyn Report) -> Self {
        match Self::from_vecs(epsilon, sigma) {
            Ok(points) => points,
            Err(PointsError::LengthMismatch { epsilon, sigma }) => {
                sink.report(&Diagnostic::LengthMismatch { epsilon, sigma });
                Self::new()
            }
            Err(_) => Self::new(),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (epsilon, sigma) = pairs.into_iter().unzip();
        Self { epsilon, sigma }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.epsilon.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.epsilon.is_empty()
    }

    pub fn clear(&mut self) {
        self.epsilon.clear();
        self.sigma.clear();
    }

    #[inline]
    pub fn push(&mut self, eps: f64, sig: f64) {
        self.epsilon.push(eps);
        self.sigma.push(sig);
    }

    /// Append `eps[range]` / `sig[range]`.
    ///
    /// Rejects mismatched sources and ranges that do not fit the sources; the
    /// series is unchanged in both cases.
    pub fn insert_range(
        &mut self,
        eps: &[f64],
        sig: &[f64],
        range: Range<usize>,
    ) -> Result<(), PointsError> {
        if eps.len() != sig.len() {
            return Err(PointsError::LengthMismatch {
                epsilon: eps.len(),
                sigma: sig.len(),
            });
        }
        if range.start > range.end || range.end > eps.len() {
            return Err(PointsError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: eps.len(),
            });
        }
        self.epsilon.extend_from_slice(&eps[range.clone()]);
        self.sigma.extend_from_slice(&sig[range]);
        Ok(())
    }

    /// Overwrite vertex `index` in place.
    pub fn change_point(&mut self, index: usize, eps: f64, sig: f64) -> Result<(), PointsError> {
        if index >= self.len() {
            return Err(PointsError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.epsilon[index] = eps;
        self.sigma[index] = sig;
        Ok(())
    }

    #[inline]
    pub fn epsilon(&self) -> &[f64] {
        &self.epsilon
    }

    #[inline]
    pub fn sigma(&self) -> &[f64] {
        &self.sigma
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.epsilon.get(index)?, *self.sigma.get(index)?))
    }

    #[inline]
    pub fn first(&self) -> Option<(f64, f64)> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<(f64, f64)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.epsilon
            .iter()
            .copied()
            .zip(self.sigma.iter().copied())
    }

    /// Strains non-decreasing (the `prep` precondition).
    pub fn is_sorted(&self) -> bool {
        self.epsilon.windows(2).all(|w| w[0] <= w[1])
    }

    /// Split back into the two sequences.
    pub fn into_vecs(self) -> (Vec<f64>, Vec<f64>) {
        (self.epsilon, self.sigma)
    }
}

impl FromIterator<(f64, f64)> for Points {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}
