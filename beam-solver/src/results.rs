//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Reaction force at a pinned support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Coordinate of the station the reaction acts at
    pub position: f64,
    /// Station index
    pub station: usize,
    /// Reaction force (positive = up)
    pub force: f64,
}

/// All response quantities at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationResult {
    pub position: f64,
    pub shear: f64,
    pub moment: f64,
    pub slope: f64,
    pub deflection: f64,
    pub top_strain: f64,
    pub bottom_strain: f64,
}

/// Largest absolute value of a response curve and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Signed value at the extreme
    pub value: f64,
    /// Station coordinate
    pub position: f64,
}

/// Response of a beam to one load set.
///
/// Every array is aligned 1:1 with `positions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Station coordinates
    pub positions: Vec<f64>,
    /// Support reactions, in support order
    pub reactions: Vec<Reaction>,
    /// Internal shear force
    pub shear: Vec<f64>,
    /// Internal bending moment (sagging positive)
    pub moment: Vec<f64>,
    /// Slope of the deflected shape
    pub slope: Vec<f64>,
    /// Transverse deflection (positive = up)
    pub deflection: Vec<f64>,
    /// Bending strain at the top fiber
    pub top_strain: Vec<f64>,
    /// Bending strain at the bottom fiber
    pub bottom_strain: Vec<f64>,
    /// Resultant of the applied loads
    pub applied_force: f64,
    /// Moment of the applied loads about x = 0
    pub applied_moment: f64,
    /// True when more than two supports required the compatibility solve
    pub redundant: bool,
}

impl SolveResult {
    /// Number of stations
    pub fn num_stations(&self) -> usize {
        self.positions.len()
    }

    /// Reaction forces in support order
    pub fn reaction_forces(&self) -> Vec<f64> {
        self.reactions.iter().map(|r| r.force).collect()
    }

    /// Results at the station nearest to `position`
    pub fn at(&self, position: f64) -> Option<StationResult> {
        if !position.is_finite() || position < -0.5 {
            return None;
        }
        let i = position.round() as usize;
        Some(StationResult {
            position: *self.positions.get(i)?,
            shear: self.shear[i],
            moment: self.moment[i],
            slope: self.slope[i],
            deflection: self.deflection[i],
            top_strain: self.top_strain[i],
            bottom_strain: self.bottom_strain[i],
        })
    }

    /// Extreme internal shear
    pub fn max_abs_shear(&self) -> Extreme {
        extreme(&self.positions, &self.shear)
    }

    /// Extreme bending moment
    pub fn max_abs_moment(&self) -> Extreme {
        extreme(&self.positions, &self.moment)
    }

    /// Extreme slope
    pub fn max_abs_slope(&self) -> Extreme {
        extreme(&self.positions, &self.slope)
    }

    /// Extreme deflection
    pub fn max_abs_deflection(&self) -> Extreme {
        extreme(&self.positions, &self.deflection)
    }

    /// Net vertical force (applied plus reactions); zero at equilibrium
    pub fn force_residual(&self) -> f64 {
        self.applied_force + self.reactions.iter().map(|r| r.force).sum::<f64>()
    }

    /// Net moment about x = 0 (applied plus reactions); zero at equilibrium
    pub fn moment_residual(&self) -> f64 {
        self.applied_moment
            + self
                .reactions
                .iter()
                .map(|r| r.force * r.position)
                .sum::<f64>()
    }

    /// Bending stress at the top fiber for a uniform elastic modulus
    pub fn top_stress(&self, modulus: f64) -> Vec<f64> {
        self.top_strain.iter().map(|e| e * modulus).collect()
    }

    /// Bending stress at the bottom fiber for a uniform elastic modulus
    pub fn bottom_stress(&self, modulus: f64) -> Vec<f64> {
        self.bottom_strain.iter().map(|e| e * modulus).collect()
    }

    /// Element-wise sum of two results on the same beam and supports
    pub fn superpose(&self, other: &SolveResult) -> BeamResult<SolveResult> {
        if self.positions.len() != other.positions.len() {
            return Err(BeamError::InvalidInput(format!(
                "Cannot superpose results with {} and {} stations",
                self.positions.len(),
                other.positions.len()
            )));
        }
        let same_supports = self.reactions.len() == other.reactions.len()
            && self
                .reactions
                .iter()
                .zip(&other.reactions)
                .all(|(a, b)| a.station == b.station);
        if !same_supports {
            return Err(BeamError::InvalidInput(
                "Cannot superpose results with different supports".to_string(),
            ));
        }

        let reactions = self
            .reactions
            .iter()
            .zip(&other.reactions)
            .map(|(a, b)| Reaction {
                force: a.force + b.force,
                ..*a
            })
            .collect();

        Ok(SolveResult {
            positions: self.positions.clone(),
            reactions,
            shear: add(&self.shear, &other.shear),
            moment: add(&self.moment, &other.moment),
            slope: add(&self.slope, &other.slope),
            deflection: add(&self.deflection, &other.deflection),
            top_strain: add(&self.top_strain, &other.top_strain),
            bottom_strain: add(&self.bottom_strain, &other.bottom_strain),
            applied_force: self.applied_force + other.applied_force,
            applied_moment: self.applied_moment + other.applied_moment,
            redundant: self.redundant || other.redundant,
        })
    }

    /// Summary of the extremes
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            num_stations: self.num_stations(),
            num_supports: self.reactions.len(),
            reactions: self.reaction_forces(),
            max_shear: self.max_abs_shear(),
            max_moment: self.max_abs_moment(),
            max_slope: self.max_abs_slope(),
            max_deflection: self.max_abs_deflection(),
            redundant: self.redundant,
        }
    }

    /// Serialize the full result as pretty JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Total number of stations
    pub num_stations: usize,
    /// Number of supports
    pub num_supports: usize,
    /// Reaction forces in support order
    pub reactions: Vec<f64>,
    /// Maximum shear
    pub max_shear: Extreme,
    /// Maximum bending moment
    pub max_moment: Extreme,
    /// Maximum slope
    pub max_slope: Extreme,
    /// Maximum deflection
    pub max_deflection: Extreme,
    /// Whether the beam was statically indeterminate
    pub redundant: bool,
}

fn extreme(positions: &[f64], values: &[f64]) -> Extreme {
    positions
        .iter()
        .zip(values)
        .fold(
            Extreme {
                value: 0.0,
                position: positions.first().copied().unwrap_or(0.0),
            },
            |best, (&position, &value)| {
                if value.abs() > best.value.abs() {
                    Extreme { value, position }
                } else {
                    best
                }
            },
        )
}

fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}
