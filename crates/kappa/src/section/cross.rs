//! Rectangular cross-section geometry (value type).

use serde::{Deserialize, Serialize};

use crate::cfg::{DEFAULT_LENGTH_MM, DEFAULT_MODULUS_MPA, DEFAULT_WIDTH_MM};

/// Rectangular section, dimensions in mm, modulus in MPa.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub modulus: f64,
}

impl CrossSection {
    /// Section of height `height` with default length, width and modulus.
    pub fn new(height: f64) -> Self {
        Self {
            length: DEFAULT_LENGTH_MM,
            height,
            width: DEFAULT_WIDTH_MM,
            modulus: DEFAULT_MODULUS_MPA,
        }
    }

    /// Distance from the centroid axis to the compression face.
    #[inline]
    pub fn h_u(&self) -> f64 {
        0.5 * self.height
    }

    /// Distance from the centroid axis to the tension face.
    #[inline]
    pub fn h_d(&self) -> f64 {
        0.5 * self.height
    }

    /// Second moment of area `b h³ / 12`.
    #[inline]
    pub fn inertia(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Elastic section modulus `b h² / 6`.
    #[inline]
    pub fn section_modulus(&self) -> f64 {
        self.width * self.height.powi(2) / 6.0
    }
}
