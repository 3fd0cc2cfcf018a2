//! Cross-section properties for bending about one axis

use serde::{Deserialize, Serialize};

/// Cross-section properties used by the beam solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Second moment of area about the bending axis
    pub i: f64,
    /// Distance from the neutral axis to the top fiber (positive up)
    pub top: f64,
    /// Distance from the neutral axis to the bottom fiber (negative down)
    pub bottom: f64,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(a: f64, i: f64, top: f64, bottom: f64) -> Self {
        Self { a, i, top, bottom }
    }

    /// Create a rectangular section bending about its width axis
    pub fn rectangular(width: f64, height: f64) -> Self {
        Self {
            a: width * height,
            i: width * height.powi(3) / 12.0,
            top: height / 2.0,
            bottom: -height / 2.0,
        }
    }

    /// Create a solid circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        Self {
            a: std::f64::consts::PI * r.powi(2),
            i: std::f64::consts::PI * diameter.powi(4) / 64.0,
            top: r,
            bottom: -r,
        }
    }

    /// Create a hollow circular (pipe) section
    pub fn pipe(outer_diameter: f64, wall_thickness: f64) -> Self {
        let r_o = outer_diameter / 2.0;
        let r_i = r_o - wall_thickness;

        Self {
            a: std::f64::consts::PI * (r_o.powi(2) - r_i.powi(2)),
            i: std::f64::consts::PI * (r_o.powi(4) - r_i.powi(4)) / 4.0,
            top: r_o,
            bottom: -r_o,
        }
    }

    /// Overall depth between the extreme fibers
    pub fn depth(&self) -> f64 {
        self.top - self.bottom
    }

    /// Elastic section modulus for the governing fiber
    pub fn section_modulus(&self) -> f64 {
        self.i / self.top.abs().max(self.bottom.abs())
    }
}
