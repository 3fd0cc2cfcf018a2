//! Distributed loads on the beam

use serde::{Deserialize, Serialize};

/// A uniformly distributed (line) load.
///
/// The load is stored by its total force, which is spread evenly over
/// `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Total force over the loaded length (positive = up)
    pub force: f64,
    /// Start position (distance from the left end)
    pub start: f64,
    /// End position (distance from the left end)
    pub end: f64,
}

impl DistributedLoad {
    /// Create a distributed load from its total force
    pub fn new(force: f64, start: f64, end: f64) -> Self {
        Self { force, start, end }
    }

    /// Create a distributed load from a force per unit length
    pub fn from_intensity(w: f64, start: f64, end: f64) -> Self {
        Self::new(w * (end - start), start, end)
    }

    /// Loaded length
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Force per unit length
    pub fn intensity(&self) -> f64 {
        self.force / self.span()
    }

    /// Position of the resultant
    pub fn centroid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            force: self.force * factor,
            start: self.start,
            end: self.end,
        }
    }

    /// Contribution to the shear force at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        if x <= self.start {
            0.0
        } else if x >= self.end {
            self.force
        } else {
            self.intensity() * (x - self.start)
        }
    }

    /// Contribution to the bending moment at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        if x <= self.start {
            0.0
        } else if x >= self.end {
            self.force * (x - self.centroid())
        } else {
            let loaded = x - self.start;
            self.intensity() * loaded * loaded / 2.0
        }
    }

    /// Moment of the resultant about the point `x0`
    pub fn moment_about(&self, x0: f64) -> f64 {
        self.force * (self.centroid() - x0)
    }
}
