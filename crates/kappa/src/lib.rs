//! Moment–curvature numerics for a rectangular cross-section.
//!
//! Layers, leaf to root:
//! - `points`: index-aligned strain/stress series (`Points`).
//! - `prep`: trim a polyline at a cut strain and close it into a polygon.
//! - `shoelace`: area and first moment of a closed polygon (scalar + lane kernel).
//! - `timeslice`: the same pipeline fanned out over many independent cuts.
//! - `section`: compression/tension force balance at one (eps_ca, kappa) pair.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the
//!   curated surface lives in `api`, the Python binding only goes through it.

pub mod api;
pub mod cfg;
pub mod points;
pub mod prep;
pub mod random;
pub mod report;
pub mod section;
pub mod shoelace;
pub mod timeslice;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::points::{Points, PointsError};
    pub use crate::prep::{bracket, prep, prep_with, try_prep, Bracket, PrepError};
    pub use crate::report::{Diagnostic, Report, Silent, Traced};
    pub use crate::section::{CrossSection, SectionCfg, SectionError, SectionEvaluator, SectionState};
    pub use crate::shoelace::{area, area_and_moment, area_and_moment_simd, moment};
    pub use crate::timeslice::{
        compute_area_timeslices, compute_momentum_timeslices, linspace, sweep, Slice,
    };
}
