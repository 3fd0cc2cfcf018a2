//! Two-plane shaft analysis
//!
//! A rotating shaft carries gear or pulley forces in two orthogonal planes.
//! Each plane is an independent beam problem on the same section profile
//! and bearings; the plane results combine into resultant moment, slope and
//! deflection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{BeamSolver, SolverOptions};
use crate::elements::SectionProfile;
use crate::error::BeamResult;
use crate::loads::Load;
use crate::model::BeamModel;
use crate::results::SolveResult;

/// Force transmitted through a gear mesh at a pressure angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearMesh {
    /// Total mesh force magnitude
    pub force: f64,
    /// Pressure angle in radians
    pub pressure_angle: f64,
}

impl GearMesh {
    pub fn new(force: f64, pressure_angle: f64) -> Self {
        Self {
            force,
            pressure_angle,
        }
    }

    /// Pressure angle given in degrees
    pub fn from_degrees(force: f64, pressure_angle_deg: f64) -> Self {
        Self::new(force, pressure_angle_deg.to_radians())
    }

    /// Component along the line of centers
    pub fn radial(&self) -> f64 {
        self.force * self.pressure_angle.sin()
    }

    /// Component tangent to the pitch circle
    pub fn tangential(&self) -> f64 {
        self.force * self.pressure_angle.cos()
    }
}

/// A shaft on pinned bearings, ready to be solved in two planes
#[derive(Debug, Clone)]
pub struct ShaftAnalysis {
    model: BeamModel,
    solver: BeamSolver,
}

impl ShaftAnalysis {
    /// Create from a section profile and bearing positions
    pub fn new(profile: SectionProfile, bearings: &[f64]) -> BeamResult<Self> {
        let mut model = BeamModel::new(profile);
        for &position in bearings {
            model.add_support(position)?;
        }
        model.validate()?;

        Ok(Self {
            model,
            solver: BeamSolver::default(),
        })
    }

    /// Use custom solver options
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.solver = BeamSolver::new(options);
        self
    }

    /// The unloaded shaft model
    pub fn model(&self) -> &BeamModel {
        &self.model
    }

    /// Solve one plane
    pub fn solve_plane(&self, loads: &[Load]) -> BeamResult<SolveResult> {
        let model = self.model.with_replaced_loads(loads)?;
        self.solver.solve(&model)
    }

    /// Solve both planes
    pub fn solve(&self, loads_xy: &[Load], loads_xz: &[Load]) -> BeamResult<ShaftResult> {
        debug!(
            "Shaft analysis: {} loads in xy, {} loads in xz",
            loads_xy.len(),
            loads_xz.len()
        );
        Ok(ShaftResult {
            xy: self.solve_plane(loads_xy)?,
            xz: self.solve_plane(loads_xz)?,
        })
    }
}

/// Combined response at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftStation {
    pub position: f64,
    pub moment: f64,
    pub slope: f64,
    pub deflection: f64,
}

/// Results for both bending planes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftResult {
    /// Response to loads in the xy plane
    pub xy: SolveResult,
    /// Response to loads in the xz plane
    pub xz: SolveResult,
}

impl ShaftResult {
    /// Resultant bending moment at each station
    pub fn resultant_moment(&self) -> Vec<f64> {
        hypot(&self.xy.moment, &self.xz.moment)
    }

    /// Resultant slope magnitude at each station
    pub fn resultant_slope(&self) -> Vec<f64> {
        hypot(&self.xy.slope, &self.xz.slope)
    }

    /// Resultant deflection magnitude at each station
    pub fn resultant_deflection(&self) -> Vec<f64> {
        hypot(&self.xy.deflection, &self.xz.deflection)
    }

    /// Resultant bearing reaction magnitudes
    pub fn resultant_reactions(&self) -> Vec<f64> {
        hypot(&self.xy.reaction_forces(), &self.xz.reaction_forces())
    }

    /// Combined response at the station nearest to `position`
    pub fn at(&self, position: f64) -> Option<ShaftStation> {
        let xy = self.xy.at(position)?;
        let xz = self.xz.at(position)?;
        Some(ShaftStation {
            position: xy.position,
            moment: xy.moment.hypot(xz.moment),
            slope: xy.slope.hypot(xz.slope),
            deflection: xy.deflection.hypot(xz.deflection),
        })
    }
}

fn hypot(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x.hypot(*y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Material, Section};
    use crate::error::BeamError;
    use crate::loads::PointLoad;
    use approx::assert_relative_eq;

    #[test]
    fn test_gear_components() {
        let mesh = GearMesh::from_degrees(100.0, 20.0);
        assert_relative_eq!(mesh.radial(), 100.0 * 20f64.to_radians().sin());
        assert_relative_eq!(mesh.radial().hypot(mesh.tangential()), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resultant_of_equal_planes() {
        let profile = SectionProfile::uniform(100, &Material::steel_mpa(), &Section::circular(30.0));
        let shaft = ShaftAnalysis::new(profile, &[0.0, 100.0]).unwrap();
        let load = [Load::Point(PointLoad::new(-100.0, 50.0))];
        let result = shaft.solve(&load, &load).unwrap();

        let mid = result.at(50.0).unwrap();
        let xy = result.xy.at(50.0).unwrap();
        assert_relative_eq!(mid.deflection, xy.deflection.abs() * 2f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(result.resultant_reactions()[0], 50.0 * 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_bearing_outside_shaft() {
        let profile = SectionProfile::uniform(100, &Material::steel_mpa(), &Section::circular(30.0));
        assert!(matches!(
            ShaftAnalysis::new(profile, &[0.0, 120.0]),
            Err(BeamError::InvalidSupport(_))
        ));
    }
}
