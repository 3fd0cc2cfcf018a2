//! Beam Solver - static response of straight beams on pinned supports
//!
//! This library solves a 1-D beam discretized into unit-spaced stations:
//! - Point and uniformly distributed transverse loads
//! - Two or more pinned supports (redundant supports via the flexibility method)
//! - Station-wise varying E·I and G·A (stepped or tapered members)
//! - Optional shear deformation (Timoshenko correction)
//! - Fiber strain recovery, two-plane shaft analysis and static failure theories
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 1016 mm steel bar, 76 x 229 mm rectangular section
//! let material = Material::new(190_000.0, 73_100.0);
//! let profile = SectionProfile::uniform(1016, &material, &Section::rectangular(76.0, 229.0));
//!
//! let mut model = BeamModel::new(profile);
//! model.add_support(254.0).unwrap();
//! model.add_support(1016.0).unwrap();
//! model.add_load(PointLoad::new(-8006.799, 0.0)).unwrap();
//! model.add_load(DistributedLoad::new(-40033.99, 254.0, 1016.0)).unwrap();
//!
//! let result = BeamSolver::default().solve(&model).unwrap();
//! let total: f64 = result.reaction_forces().iter().sum();
//! assert!((total - 48040.789).abs() < 1e-6);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod failure;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;
pub mod shaft;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{BeamSolver, SolverOptions};
    pub use crate::elements::{Material, Section, SectionProfile, Support};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::failure::{assess, FailureAssessment, StressTensor, Strengths};
    pub use crate::loads::{DistributedLoad, Load, PointLoad};
    pub use crate::model::BeamModel;
    pub use crate::results::{Reaction, ResultSummary, SolveResult, StationResult};
    pub use crate::shaft::{GearMesh, ShaftAnalysis, ShaftResult};
}
