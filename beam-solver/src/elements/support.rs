//! Pinned supports

use serde::{Deserialize, Serialize};

/// A pinned support: transverse deflection restrained, rotation free.
///
/// The restraint acts at the station nearest to `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Requested position along the beam
    pub position: f64,
    /// Station index where the restraint is applied
    pub station: usize,
}

impl Support {
    /// Create a support on a beam with `length` unit-spaced segments
    pub fn pinned(position: f64, length: usize) -> Self {
        let station = (position.round().max(0.0) as usize).min(length);
        Self { position, station }
    }

    /// Coordinate of the station the support acts at
    pub fn station_position(&self) -> f64 {
        self.station as f64
    }

    /// True when the requested position is not itself a station
    pub fn is_snapped(&self) -> bool {
        (self.position - self.station_position()).abs() > 1e-12
    }
}
