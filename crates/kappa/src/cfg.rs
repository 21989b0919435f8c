//! Numeric defaults (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the crate: adjust here rather than
//!   threading tolerances through every call site.

/// Lane width of the vectorized shoelace kernel (4 × f64 = one AVX2 register).
pub const LANES: usize = 4;

/// Relative tolerance at which the lane kernel must agree with the scalar one.
pub const LANE_REL_TOL: f64 = 1e-9;

/// Default cross-section length in mm.
pub const DEFAULT_LENGTH_MM: f64 = 160.0;
/// Default cross-section width in mm.
pub const DEFAULT_WIDTH_MM: f64 = 1.0;
/// Default elastic modulus in MPa.
pub const DEFAULT_MODULUS_MPA: f64 = 60_000.0;
