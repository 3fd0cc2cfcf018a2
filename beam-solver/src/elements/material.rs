//! Material properties

use serde::{Deserialize, Serialize};

/// Linear-elastic material properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus)
    pub e: f64,
    /// Shear modulus
    pub g: f64,
    /// Poisson's ratio (informational when built from `new`)
    pub nu: f64,
}

impl Material {
    /// Create a new material from E and G.
    /// Poisson's ratio is back-calculated as E / (2G) - 1.
    pub fn new(e: f64, g: f64) -> Self {
        Self {
            e,
            g,
            nu: e / (2.0 * g) - 1.0,
        }
    }

    /// Create a new isotropic material from E and nu
    /// G is calculated as E / (2 * (1 + nu))
    pub fn isotropic(e: f64, nu: f64) -> Self {
        Self {
            e,
            g: e / (2.0 * (1.0 + nu)),
            nu,
        }
    }

    /// Carbon steel in MPa (E = 207 GPa, G = 79.3 GPa)
    pub fn steel_mpa() -> Self {
        Self::new(207_000.0, 79_300.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel_mpa()
    }
}
