//! Beam model - discretized geometry, loads and supports

use serde::{Deserialize, Serialize};

use crate::analysis::BeamSolver;
use crate::elements::{SectionProfile, Support};
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::results::SolveResult;

/// A straight beam discretized into unit-spaced stations `0..=length`.
///
/// Property arrays hold one entry per station. Loads may sit anywhere on
/// `[0, length]`; supports restrain deflection at their nearest station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Number of unit-length segments
    pub length: usize,
    /// E·I at each station
    pub flexural_rigidity: Vec<f64>,
    /// G·A at each station, if shear deformation is modelled
    pub shear_rigidity: Option<Vec<f64>>,
    /// Top fiber distance from the neutral axis at each station
    pub top_fiber: Vec<f64>,
    /// Bottom fiber distance from the neutral axis at each station
    pub bottom_fiber: Vec<f64>,
    /// Applied transverse loads
    pub loads: Vec<Load>,
    /// Pinned support positions, sorted ascending
    pub supports: Vec<f64>,
}

impl BeamModel {
    /// Create an unloaded, unsupported model from a section profile
    pub fn new(profile: SectionProfile) -> Self {
        Self {
            length: profile.length,
            flexural_rigidity: profile.flexural_rigidity,
            shear_rigidity: profile.shear_rigidity,
            top_fiber: profile.top_fiber,
            bottom_fiber: profile.bottom_fiber,
            loads: Vec::new(),
            supports: Vec::new(),
        }
    }

    /// Create a model from raw station arrays. Call [`validate`](Self::validate)
    /// (or solve) to check them.
    pub fn from_arrays(
        length: usize,
        flexural_rigidity: Vec<f64>,
        shear_rigidity: Option<Vec<f64>>,
        top_fiber: Vec<f64>,
        bottom_fiber: Vec<f64>,
    ) -> Self {
        Self {
            length,
            flexural_rigidity,
            shear_rigidity,
            top_fiber,
            bottom_fiber,
            loads: Vec::new(),
            supports: Vec::new(),
        }
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a load
    pub fn add_load(&mut self, load: impl Into<Load>) -> BeamResult<()> {
        let load = load.into();
        self.check_load(&load)?;
        self.loads.push(load);
        Ok(())
    }

    /// Add a pinned support
    pub fn add_support(&mut self, position: f64) -> BeamResult<()> {
        self.check_support_position(position)?;
        let index = self.supports.partition_point(|&s| s < position);
        if self.supports.get(index) == Some(&position) {
            return Err(BeamError::InvalidSupport(format!(
                "Duplicate support at position {position}"
            )));
        }
        self.supports.insert(index, position);
        Ok(())
    }

    /// Builder form of [`add_load`](Self::add_load)
    pub fn with_load(mut self, load: impl Into<Load>) -> BeamResult<Self> {
        self.add_load(load)?;
        Ok(self)
    }

    /// Builder form of [`add_load`](Self::add_load) for several loads
    pub fn with_loads<I, L>(mut self, loads: I) -> BeamResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<Load>,
    {
        for load in loads {
            self.add_load(load)?;
        }
        Ok(self)
    }

    /// Builder form of [`add_support`](Self::add_support)
    pub fn with_support(mut self, position: f64) -> BeamResult<Self> {
        self.add_support(position)?;
        Ok(self)
    }

    /// Same geometry and supports with a different load set
    pub fn with_replaced_loads(&self, loads: &[Load]) -> BeamResult<Self> {
        let mut model = Self {
            loads: Vec::with_capacity(loads.len()),
            ..self.clone()
        };
        for load in loads {
            model.add_load(*load)?;
        }
        Ok(model)
    }

    // ========================
    // Queries
    // ========================

    /// Number of stations
    pub fn num_stations(&self) -> usize {
        self.length + 1
    }

    /// Station coordinates `0, 1, ..., length`
    pub fn positions(&self) -> Vec<f64> {
        (0..=self.length).map(|i| i as f64).collect()
    }

    /// Supports resolved to their stations, in ascending order
    pub fn resolved_supports(&self) -> Vec<Support> {
        let mut supports: Vec<Support> = self
            .supports
            .iter()
            .map(|&p| Support::pinned(p, self.length))
            .collect();
        supports.sort_by(|a, b| a.position.total_cmp(&b.position));
        supports
    }

    /// Sum of all applied forces
    pub fn total_load(&self) -> f64 {
        self.loads.iter().map(Load::total_force).sum()
    }

    /// Sum of the applied loads' moments about `x0`
    pub fn total_moment_about(&self, x0: f64) -> f64 {
        self.loads.iter().map(|l| l.moment_about(x0)).sum()
    }

    /// Solve with default solver options
    pub fn solve(&self) -> BeamResult<SolveResult> {
        BeamSolver::default().solve(self)
    }

    // ========================
    // Validation
    // ========================

    /// Check geometry, supports and loads
    pub fn validate(&self) -> BeamResult<()> {
        self.validate_geometry()?;
        self.validate_supports()?;
        for load in &self.loads {
            self.check_load(load)?;
        }
        Ok(())
    }

    fn validate_geometry(&self) -> BeamResult<()> {
        if self.length == 0 {
            return Err(BeamError::InvalidGeometry(
                "Beam length must be at least one segment".to_string(),
            ));
        }

        let n = self.num_stations();
        check_array_len("flexural_rigidity", &self.flexural_rigidity, n)?;
        check_array_len("top_fiber", &self.top_fiber, n)?;
        check_array_len("bottom_fiber", &self.bottom_fiber, n)?;

        if let Some((i, ei)) = self
            .flexural_rigidity
            .iter()
            .enumerate()
            .find(|(_, ei)| !(ei.is_finite() && **ei > 0.0))
        {
            return Err(BeamError::InvalidGeometry(format!(
                "Flexural rigidity must be positive and finite, got {ei} at station {i}"
            )));
        }

        if let Some(shear) = &self.shear_rigidity {
            check_array_len("shear_rigidity", shear, n)?;
            // Infinite G·A is allowed and means no shear deformation
            if let Some((i, ga)) = shear.iter().enumerate().find(|(_, ga)| !(**ga > 0.0)) {
                return Err(BeamError::InvalidGeometry(format!(
                    "Shear rigidity must be positive, got {ga} at station {i}"
                )));
            }
        }

        if let Some(i) =
            (0..n).find(|&i| !self.top_fiber[i].is_finite() || !self.bottom_fiber[i].is_finite())
        {
            return Err(BeamError::InvalidGeometry(format!(
                "Fiber distances must be finite at station {i}"
            )));
        }

        Ok(())
    }

    fn validate_supports(&self) -> BeamResult<()> {
        if self.supports.len() < 2 {
            return Err(BeamError::InvalidSupport(format!(
                "At least 2 supports are required, got {}",
                self.supports.len()
            )));
        }

        for &position in &self.supports {
            self.check_support_position(position)?;
        }

        let mut sorted = self.supports.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(BeamError::InvalidSupport(format!(
                "Duplicate support at position {}",
                w[0]
            )));
        }

        Ok(())
    }

    fn check_support_position(&self, position: f64) -> BeamResult<()> {
        if !position.is_finite() || position < 0.0 || position > self.length as f64 {
            return Err(BeamError::InvalidSupport(format!(
                "Support at {position} lies outside the beam [0, {}]",
                self.length
            )));
        }
        Ok(())
    }

    fn check_load(&self, load: &Load) -> BeamResult<()> {
        if !load.total_force().is_finite() {
            return Err(BeamError::InvalidLoad(format!(
                "Load force must be finite, got {}",
                load.total_force()
            )));
        }

        let (start, end) = load.extent();
        let span = self.length as f64;
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end > span {
            return Err(BeamError::InvalidLoad(format!(
                "Load over [{start}, {end}] lies outside the beam [0, {span}]"
            )));
        }
        if matches!(load, Load::Distributed(_)) && end <= start {
            return Err(BeamError::InvalidLoad(format!(
                "Distributed load must end after it starts, got [{start}, {end}]"
            )));
        }

        Ok(())
    }
}

fn check_array_len(name: &str, values: &[f64], expected: usize) -> BeamResult<()> {
    if values.len() != expected {
        return Err(BeamError::InvalidGeometry(format!(
            "{name} has {} entries, expected {expected} (one per station)",
            values.len()
        )));
    }
    Ok(())
}
