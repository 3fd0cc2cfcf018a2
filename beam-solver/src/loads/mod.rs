//! Load types

mod distributed;
mod point_load;

use serde::{Deserialize, Serialize};

pub use distributed::DistributedLoad;
pub use point_load::PointLoad;

/// Any transverse load the solver understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    Point(PointLoad),
    Distributed(DistributedLoad),
}

impl Load {
    /// Resultant force of the load
    pub fn total_force(&self) -> f64 {
        match self {
            Load::Point(p) => p.force,
            Load::Distributed(d) => d.force,
        }
    }

    /// Position of the resultant
    pub fn centroid(&self) -> f64 {
        match self {
            Load::Point(p) => p.position,
            Load::Distributed(d) => d.centroid(),
        }
    }

    /// Extent of the load along the beam as `(start, end)`
    pub fn extent(&self) -> (f64, f64) {
        match self {
            Load::Point(p) => (p.position, p.position),
            Load::Distributed(d) => (d.start, d.end),
        }
    }

    /// Moment of the resultant about `x0`
    pub fn moment_about(&self, x0: f64) -> f64 {
        match self {
            Load::Point(p) => p.moment_about(x0),
            Load::Distributed(d) => d.moment_about(x0),
        }
    }

    /// Contribution to the shear force at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        match self {
            Load::Point(p) => p.shear_at(x),
            Load::Distributed(d) => d.shear_at(x),
        }
    }

    /// Contribution to the bending moment at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        match self {
            Load::Point(p) => p.moment_at(x),
            Load::Distributed(d) => d.moment_at(x),
        }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Load::Point(p) => Load::Point(p.scaled(factor)),
            Load::Distributed(d) => Load::Distributed(d.scaled(factor)),
        }
    }
}

impl From<PointLoad> for Load {
    fn from(load: PointLoad) -> Self {
        Load::Point(load)
    }
}

impl From<DistributedLoad> for Load {
    fn from(load: DistributedLoad) -> Self {
        Load::Distributed(load)
    }
}
