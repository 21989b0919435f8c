//! Polyline trimming: cut a stress–strain polyline at a strain and close it.
//!
//! Given a cut strain `c` and a polyline with ascending strains, the closed
//! polygon is
//!
//! ```text
//! (eps_0, sig_0) .. (eps_{k-1}, sig_{k-1})   all vertices with eps < c
//! (c, sig(c))                                interpolated point on the curve
//! (c, 0)                                     projection onto the strain axis
//! (eps_0, sig_0)                             first vertex again, closing the loop
//! ```
//!
//! which is what the shoelace evaluator integrates.
//!
//! Failure is a tagged `PrepError`, so a cut at a first vertex `(0, 0)` is a
//! regular success with index 0 and value 0.0.

use thiserror::Error;

use crate::points::Points;
use crate::report::{Diagnostic, Report, Traced};

/// Why a polyline could not be cut.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PrepError {
    #[error("polyline needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },
    #[error("cut {cut} is not a finite strain")]
    NonFinite { cut: f64 },
    #[error("cut {cut} is out of range [{lo}, {hi}]")]
    OutOfDomain { cut: f64, lo: f64, hi: f64 },
    #[error("failed to bracket cut {cut} (index {index}); are the strains sorted?")]
    Unbracketed { cut: f64, index: usize },
}

/// Located cut on a polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    /// First vertex with `eps >= cut` (lower bound). Vertices `[0, index)` lie
    /// strictly below the cut.
    pub index: usize,
    /// Stress at the cut.
    pub value: f64,
    /// The cut hit vertex `index` exactly; `value` was read, not interpolated.
    pub exact: bool,
}

/// Locate `cut` on `lm` and evaluate the polyline there.
pub fn bracket(cut: f64, lm: &Points) -> Result<Bracket, PrepError> {
    let n = lm.len();
    if n < 2 {
        return Err(PrepError::TooFewPoints { len: n });
    }
    if !cut.is_finite() {
        return Err(PrepError::NonFinite { cut });
    }
    let eps = lm.epsilon();
    let sig = lm.sigma();
    let (lo, hi) = (eps[0], eps[n - 1]);
    if cut < lo || cut > hi {
        return Err(PrepError::OutOfDomain { cut, lo, hi });
    }

    let idx = eps.partition_point(|&e| e < cut);
    if idx < n && eps[idx] == cut {
        return Ok(Bracket {
            index: idx,
            value: sig[idx],
            exact: true,
        });
    }
    if idx == 0 || idx >= n {
        return Err(PrepError::Unbracketed { cut, index: idx });
    }

    let (i, j) = (idx - 1, idx);
    let t = (cut - eps[i]) / (eps[j] - eps[i]);
    Ok(Bracket {
        index: idx,
        value: sig[i] + t * (sig[j] - sig[i]),
        exact: false,
    })
}

/// Stress of the polyline at `cut`.
#[inline]
pub fn interpolate(cut: f64, lm: &Points) -> Result<f64, PrepError> {
    bracket(cut, lm).map(|b| b.value)
}

/// Closed polygon of `lm` trimmed at `cut`.
pub fn try_prep(cut: f64, lm: &Points) -> Result<Points, PrepError> {
    let b = bracket(cut, lm)?;
    let eps = lm.epsilon();
    let sig = lm.sigma();

    let mut out = Points::with_capacity(b.index + 3);
    // Cannot fail: both slices come from the same series and index <= len.
    if out.insert_range(eps, sig, 0..b.index).is_err() {
        return Err(PrepError::Unbracketed {
            cut,
            index: b.index,
        });
    }
    out.push(cut, b.value);
    out.push(cut, 0.0);
    out.push(eps[0], sig[0]);
    Ok(out)
}

/// Lenient `try_prep`: empty series on failure, reported through `tracing`.
#[inline]
pub fn prep(cut: f64, lm: &Points) -> Points {
    prep_with(cut, lm, &Traced)
}

/// Lenient `try_prep` with an explicit diagnostics sink.
pub fn prep_with(cut: f64, lm: &Points, sink: &dyn Report) -> Points {
    match try_prep(cut, lm) {
        Ok(polygon) => polygon,
        Err(err) => {
            sink.report(&Diagnostic::Prep(err));
            Points::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Collect, Silent};
    use approx::assert_relative_eq;

    fn falling() -> Points {
        Points::from_vecs(vec![0.0, 0.5, 1.0, 1.5, 2.0], vec![2.0, 1.5, 1.0, 0.5, 0.0]).unwrap()
    }

    fn negative() -> Points {
        Points::from_vecs(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![-4.0, -3.0, -2.0, -1.0, 0.0],
        )
        .unwrap()
    }

    fn expected(lm: &Points, i: usize, cut: f64) -> f64 {
        let (e, s) = (lm.epsilon(), lm.sigma());
        s[i] + (cut - e[i]) / (e[i + 1] - e[i]) * (s[i + 1] - s[i])
    }

    #[test]
    fn bracket_interpolates_inside_segment() {
        let lm = falling();
        let b = bracket(1.2, &lm).unwrap();
        assert_eq!(b.index, 3);
        assert!(!b.exact);
        assert_relative_eq!(b.value, expected(&lm, 2, 1.2));

        let lm = negative();
        let b = bracket(2.5, &lm).unwrap();
        assert_eq!(b.index, 3);
        assert_relative_eq!(b.value, expected(&lm, 2, 2.5));
    }

    #[test]
    fn bracket_exact_match_reads_vertex() {
        let b = bracket(2.0, &negative()).unwrap();
        assert_eq!(
            b,
            Bracket {
                index: 2,
                value: -2.0,
                exact: true
            }
        );
    }

    #[test]
    fn bracket_domain_errors() {
        assert!(matches!(
            bracket(-1.0, &falling()),
            Err(PrepError::OutOfDomain { .. })
        ));
        assert!(matches!(
            bracket(5.0, &negative()),
            Err(PrepError::OutOfDomain { .. })
        ));
        assert_eq!(
            bracket(1.0, &Points::new()),
            Err(PrepError::TooFewPoints { len: 0 })
        );
        assert!(matches!(
            bracket(f64::NAN, &falling()),
            Err(PrepError::NonFinite { .. })
        ));
    }

    #[test]
    fn infinite_cut_is_not_finite() {
        for cut in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(bracket(cut, &falling()), Err(PrepError::NonFinite { cut }));
            assert!(try_prep(cut, &negative()).is_err());
        }
    }

    #[test]
    fn zero_at_first_vertex_is_success() {
        let lm = Points::from_vecs(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 1.0]).unwrap();
        let b = bracket(0.0, &lm).unwrap();
        assert_eq!(b.index, 0);
        assert_eq!(b.value, 0.0);
        assert!(b.exact);
        let poly = try_prep(0.0, &lm).unwrap();
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn prep_builds_closed_polygon() {
        let lm = falling();
        let cut = 1.25;
        let p = try_prep(cut, &lm).unwrap();
        assert_eq!(p.len(), 6);
        assert_eq!(&p.epsilon()[..3], &[0.0, 0.5, 1.0]);
        assert_eq!(p.get(3).unwrap().0, cut);
        assert_relative_eq!(p.get(3).unwrap().1, expected(&lm, 2, cut));
        assert_eq!(p.get(4), Some((cut, 0.0)));
        assert_eq!(p.get(5), lm.first());
    }

    #[test]
    fn prep_keeps_vertices_below_cut() {
        let lm = negative();
        let p = try_prep(2.5, &lm).unwrap();
        assert_eq!(p.len(), 6);
        assert_eq!(&p.epsilon()[..3], &[0.0, 1.0, 2.0]);
        assert_eq!(&p.sigma()[..3], &[-4.0, -3.0, -2.0]);
        assert_eq!(p.get(4), Some((2.5, 0.0)));
        assert_eq!(p.get(5), Some((0.0, -4.0)));
    }

    #[test]
    fn prep_at_vertex_does_not_duplicate_it() {
        let lm = negative();
        let p = try_prep(2.0, &lm).unwrap();
        assert_eq!(p.epsilon(), &[0.0, 1.0, 2.0, 2.0, 0.0]);
        assert_eq!(p.sigma(), &[-4.0, -3.0, -2.0, 0.0, -4.0]);
    }

    #[test]
    fn lenient_prep_returns_empty_and_reports() {
        let sink = Collect::new();
        assert!(prep_with(-1.0, &falling(), &sink).is_empty());
        assert!(prep_with(5.0, &negative(), &sink).is_empty());
        assert_eq!(sink.len(), 2);
        assert!(prep_with(1.0, &falling(), &Silent).len() == 5);
        assert!(prep(-1.0, &falling()).is_empty());
    }
}
