//! Static analysis of a discretized beam

mod integration;
mod statics;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::BeamResult;
use crate::loads::{Load, PointLoad};
use crate::model::BeamModel;
use crate::results::{Reaction, SolveResult};

pub use integration::{
    fiber_strain, fit_to_stations, internal_forces, raw_deformation, Stiffness,
};
pub use statics::{determinate_reactions, indeterminate_reactions};

/// Options for the beam solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Include shear deformation when the model carries G·A
    pub shear_deformation: bool,
    /// Check static equilibrium after solving
    pub check_statics: bool,
    /// Relative pivot size below which the flexibility matrix is singular
    pub singular_tolerance: f64,
    /// Relative residual above which the statics check warns
    pub statics_tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            shear_deformation: true,
            check_statics: true,
            singular_tolerance: 1e-10,
            statics_tolerance: 1e-9,
        }
    }
}

impl SolverOptions {
    /// Bending deformation only, ignoring any G·A in the model
    pub fn euler_bernoulli() -> Self {
        Self {
            shear_deformation: false,
            ..Self::default()
        }
    }

    /// Enable or disable shear deformation
    pub fn with_shear_deformation(mut self, enabled: bool) -> Self {
        self.shear_deformation = enabled;
        self
    }

    /// Enable or disable the statics check
    pub fn with_statics_check(mut self, enabled: bool) -> Self {
        self.check_statics = enabled;
        self
    }

    /// Set the singularity tolerance
    pub fn with_singular_tolerance(mut self, tol: f64) -> Self {
        self.singular_tolerance = tol;
        self
    }
}

/// Stateless static solver for [`BeamModel`]s.
///
/// Each call to [`solve`](Self::solve) is a pure function of its model, so
/// one solver may be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeamSolver {
    options: SolverOptions,
}

impl BeamSolver {
    /// Create a solver with the given options
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Solve for reactions, shear, moment, slope, deflection and fiber strains
    pub fn solve(&self, model: &BeamModel) -> BeamResult<SolveResult> {
        model.validate()?;

        let n = model.num_stations();
        let supports = model.resolved_supports();
        for support in supports.iter().filter(|s| s.is_snapped()) {
            warn!(
                "Support at {} acts at station {}",
                support.position, support.station
            );
        }

        let shear_rigidity = if self.options.shear_deformation {
            model.shear_rigidity.as_deref()
        } else {
            None
        };
        let stiffness = Stiffness::new(&model.flexural_rigidity, shear_rigidity);

        debug!(
            "Solving beam: {} stations, {} supports, {} loads, shear deformation {}",
            n,
            supports.len(),
            model.loads.len(),
            shear_rigidity.is_some()
        );

        let redundant = supports.len() > 2;
        let forces = if redundant {
            indeterminate_reactions(
                &model.loads,
                &supports,
                &stiffness,
                n,
                self.options.singular_tolerance,
            )?
        } else {
            let (left, right) =
                determinate_reactions(&model.loads, supports[0].station, supports[1].station)?;
            vec![left, right]
        };

        let reactions: Vec<Reaction> = supports
            .iter()
            .zip(&forces)
            .map(|(s, &force)| Reaction {
                position: s.station_position(),
                station: s.station,
                force,
            })
            .collect();
        debug!("Reactions: {:?}", forces);

        let mut all_loads = model.loads.clone();
        all_loads.extend(
            reactions
                .iter()
                .map(|r| Load::Point(PointLoad::new(r.force, r.position))),
        );

        let (shear, moment) = internal_forces(&all_loads, n);
        let (mut slope, mut deflection) = raw_deformation(&shear, &moment, &stiffness);
        let stations: Vec<usize> = supports.iter().map(|s| s.station).collect();
        fit_to_stations(&mut slope, &mut deflection, &stations);

        let top_strain = fiber_strain(&moment, &model.flexural_rigidity, &model.top_fiber);
        let bottom_strain = fiber_strain(&moment, &model.flexural_rigidity, &model.bottom_fiber);

        let result = SolveResult {
            positions: model.positions(),
            reactions,
            shear,
            moment,
            slope,
            deflection,
            top_strain,
            bottom_strain,
            applied_force: model.total_load(),
            applied_moment: model.total_moment_about(0.0),
            redundant,
        };

        if self.options.check_statics {
            self.check_statics(model, &result);
        }

        Ok(result)
    }

    /// Solve a list of independent models
    pub fn solve_all(&self, models: &[BeamModel]) -> BeamResult<Vec<SolveResult>> {
        models.iter().map(|m| self.solve(m)).collect()
    }

    /// Returns false, after logging a warning, when the residuals exceed
    /// the statics tolerance
    fn check_statics(&self, model: &BeamModel, result: &SolveResult) -> bool {
        let force_scale: f64 = model.loads.iter().map(|l| l.total_force().abs()).sum();
        if force_scale == 0.0 {
            return true;
        }
        let moment_scale = force_scale * model.length as f64;

        let force_error = result.force_residual().abs() / force_scale;
        let moment_error = result.moment_residual().abs() / moment_scale;
        if force_error > self.options.statics_tolerance
            || moment_error > self.options.statics_tolerance
        {
            warn!(
                "Statics check failed: force residual {:.3e}, moment residual {:.3e} (relative)",
                force_error, moment_error
            );
            return false;
        }
        true
    }
}
