//! Diagnostics sink for lenient entry points.
//!
//! The strict API returns `Result`s and never logs. The lenient variants
//! (`Points::from_vecs_or_empty`, `prep_with`) swallow failures into an empty
//! series; they hand the reason to an injected `Report` so callers decide
//! where it goes. `Traced` forwards to `tracing`, `Collect` keeps events for
//! inspection.

use std::sync::Mutex;

use crate::prep::PrepError;

/// Something a lenient entry point degraded on.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Strain and stress sequences of different length.
    LengthMismatch { epsilon: usize, sigma: usize },
    /// Preprocessing failed; the caller received an empty polygon.
    Prep(PrepError),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::LengthMismatch { epsilon, sigma } => write!(
                f,
                "epsilon and sigma must have the same length (got {epsilon} and {sigma})"
            ),
            Diagnostic::Prep(err) => write!(f, "preprocessing failed: {err}"),
        }
    }
}

/// Reporting capability handed to lenient entry points.
pub trait Report: Send + Sync {
    fn report(&self, event: &Diagnostic);
}

/// Emits every diagnostic as a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Traced;

impl Report for Traced {
    fn report(&self, event: &Diagnostic) {
        match event {
            Diagnostic::LengthMismatch { epsilon, sigma } => {
                tracing::error!(epsilon, sigma, "points length mismatch");
            }
            Diagnostic::Prep(err) => {
                tracing::error!(error = %err, "preprocessing failed");
            }
        }
    }
}

/// Drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Report for Silent {
    fn report(&self, _event: &Diagnostic) {}
}

/// Keeps diagnostics in memory, in arrival order.
#[derive(Debug, Default)]
pub struct Collect {
    events: Mutex<Vec<Diagnostic>>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Report for Collect {
    fn report(&self, event: &Diagnostic) {
        let mut guard = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(event.clone());
    }
}
