//! Concentrated loads on the beam

use serde::{Deserialize, Serialize};

/// A concentrated transverse force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Force magnitude (positive = up)
    pub force: f64,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(force: f64, position: f64) -> Self {
        Self { force, position }
    }

    /// Create a downward (negative) point load
    pub fn downward(magnitude: f64, position: f64) -> Self {
        Self::new(-magnitude.abs(), position)
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            force: self.force * factor,
            position: self.position,
        }
    }

    /// Contribution to the shear force at `x`.
    ///
    /// The force is included at its own position, so the jump happens at
    /// `x == position`.
    pub fn shear_at(&self, x: f64) -> f64 {
        if x >= self.position {
            self.force
        } else {
            0.0
        }
    }

    /// Contribution to the bending moment at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        if x >= self.position {
            self.force * (x - self.position)
        } else {
            0.0
        }
    }

    /// Moment of the force about the point `x0`
    pub fn moment_about(&self, x0: f64) -> f64 {
        self.force * (self.position - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_at_position() {
        let load = PointLoad::new(-10.0, 5.0);
        assert_eq!(load.shear_at(4.999), 0.0);
        assert_eq!(load.shear_at(5.0), -10.0);
        assert_eq!(load.moment_at(5.0), 0.0);
        assert_eq!(load.moment_at(7.0), -20.0);
    }

    #[test]
    fn test_downward_is_negative() {
        assert_eq!(PointLoad::downward(3.0, 1.0).force, -3.0);
        assert_eq!(PointLoad::downward(-3.0, 1.0).force, -3.0);
    }
}
