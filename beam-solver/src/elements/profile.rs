//! Station-indexed section properties along the beam
//!
//! Section changes are written as contiguous ranges into per-station arrays,
//! so a stepped or tapered member is just a different fill of the same
//! vectors the solver reads.

use serde::{Deserialize, Serialize};

use super::{Material, Section};
use crate::error::{BeamError, BeamResult};

/// Per-station stiffness and fiber arrays for a beam of `length` segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProfile {
    /// Number of unit-length segments (stations are `0..=length`)
    pub length: usize,
    /// E·I at each station
    pub flexural_rigidity: Vec<f64>,
    /// G·A at each station; `None` for a pure Euler-Bernoulli beam
    pub shear_rigidity: Option<Vec<f64>>,
    /// Top fiber distance at each station
    pub top_fiber: Vec<f64>,
    /// Bottom fiber distance at each station
    pub bottom_fiber: Vec<f64>,
}

impl SectionProfile {
    /// A prismatic beam with the same section everywhere
    pub fn uniform(length: usize, material: &Material, section: &Section) -> Self {
        let n = length + 1;
        Self {
            length,
            flexural_rigidity: vec![material.e * section.i; n],
            shear_rigidity: Some(vec![material.g * section.a; n]),
            top_fiber: vec![section.top; n],
            bottom_fiber: vec![section.bottom; n],
        }
    }

    /// Replace the section on stations with `start < x <= end`
    pub fn with_segment(
        mut self,
        start: f64,
        end: f64,
        material: &Material,
        section: &Section,
    ) -> BeamResult<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(BeamError::InvalidGeometry(format!(
                "Segment range ({start}, {end}] is not a valid interval"
            )));
        }
        if start < 0.0 || end > self.length as f64 {
            return Err(BeamError::InvalidGeometry(format!(
                "Segment range ({start}, {end}] lies outside the beam [0, {}]",
                self.length
            )));
        }

        // Stations with start < x <= end
        let first = start.floor() as usize + 1;
        let last = end.floor() as usize;
        if first > last {
            return Ok(self);
        }

        let range = first..=last;
        self.flexural_rigidity[range.clone()].fill(material.e * section.i);
        if let Some(shear) = self.shear_rigidity.as_mut() {
            shear[range.clone()].fill(material.g * section.a);
        }
        self.top_fiber[range.clone()].fill(section.top);
        self.bottom_fiber[range].fill(section.bottom);

        Ok(self)
    }

    /// A stepped circular shaft.
    ///
    /// Change locations are rounded to the nearest station first.
    /// `diameters[0]` runs from 0 to `change_locations[0]`; every later
    /// diameter `k` covers `(change_locations[k-1], change_locations[k]]`.
    /// The shaft ends at the last change location.
    pub fn stepped_shaft(
        material: &Material,
        diameters: &[f64],
        change_locations: &[f64],
    ) -> BeamResult<Self> {
        if diameters.is_empty() || diameters.len() != change_locations.len() {
            return Err(BeamError::InvalidGeometry(format!(
                "Expected one change location per diameter, got {} diameters and {} locations",
                diameters.len(),
                change_locations.len()
            )));
        }
        if let Some(d) = diameters.iter().find(|d| !(d.is_finite() && **d > 0.0)) {
            return Err(BeamError::InvalidGeometry(format!(
                "Shaft diameter must be positive, got {d}"
            )));
        }
        if change_locations.windows(2).any(|w| w[1] < w[0]) {
            return Err(BeamError::InvalidGeometry(
                "Diameter change locations must be non-decreasing".to_string(),
            ));
        }
        if let Some(x) = change_locations.iter().find(|x| !x.is_finite() || **x < 0.0) {
            return Err(BeamError::InvalidGeometry(format!(
                "Diameter change location must be finite and non-negative, got {x}"
            )));
        }

        let stations: Vec<f64> = change_locations.iter().map(|x| x.round()).collect();
        let last = stations[stations.len() - 1];
        if last < 1.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "Shaft length must be at least one unit, got {}",
                change_locations[change_locations.len() - 1]
            )));
        }
        let length = last as usize;

        let mut profile = Self::uniform(length, material, &Section::circular(diameters[0]));
        for (k, window) in stations.windows(2).enumerate() {
            profile = profile.with_segment(
                window[0],
                window[1],
                material,
                &Section::circular(diameters[k + 1]),
            )?;
        }

        Ok(profile)
    }

    /// Drop the shear rigidity, giving a pure Euler-Bernoulli beam
    pub fn without_shear(mut self) -> Self {
        self.shear_rigidity = None;
        self
    }

    /// Number of stations
    pub fn num_stations(&self) -> usize {
        self.length + 1
    }

    /// Depth between extreme fibers at a station
    pub fn depth_at(&self, station: usize) -> Option<f64> {
        let top = self.top_fiber.get(station)?;
        let bottom = self.bottom_fiber.get(station)?;
        Some(top - bottom)
    }
}
