//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is the convenience surface the CLI and the
//!   Python binding import from; breaking changes are allowed.

// Series and preprocessing
pub use crate::points::{Points, PointsError};
pub use crate::prep::{bracket, interpolate, prep, prep_with, try_prep, Bracket, PrepError};
// Integrals
pub use crate::shoelace::{
    area, area_and_moment, area_and_moment_lanes, area_and_moment_simd, area_simd, centroid,
    moment, moment_simd,
};
// Batches
pub use crate::timeslice::{
    compute_area_momentum_timeslices, compute_area_timeslices, compute_momentum_timeslices,
    linspace, prep_timeslices, sweep, sweep_with, Slice,
};
// Section
pub use crate::section::{
    evaluate, CrossSection, Face, SectionCfg, SectionError, SectionEvaluator, SectionState,
};
// Diagnostics and sampling
pub use crate::random::{draw_keypoints, draw_polyline, GenError, PolylineCfg};
pub use crate::report::{Collect, Diagnostic, Report, Silent, Traced};

/// Default compression curve of the demo driver: linear to 180 MPa at 3 ‰,
/// plateau to 10 ‰.
pub fn demo_compression() -> Points {
    Points::from_pairs([(0.0, 0.0), (3.0 / 1000.0, 180.0), (10.0 / 1000.0, 180.0)])
}

/// Default tension curve of the demo driver.
pub fn demo_tension() -> Points {
    Points::from_pairs([
        (0.0, 0.0),
        (2.0 / 1000.0, 50.0),
        (4.0 / 1000.0, 50.0),
        (8.0 / 1000.0, 75.0),
    ])
}
