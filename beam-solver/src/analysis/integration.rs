//! Internal forces and deformations along the discretized beam

use crate::loads::Load;
use crate::math::cumulative_trapezoid;

/// Station stiffness arrays read by the integrators
#[derive(Debug, Clone, Copy)]
pub struct Stiffness<'a> {
    flexural: &'a [f64],
    shear: Option<&'a [f64]>,
}

impl<'a> Stiffness<'a> {
    /// `shear` of `None` gives a pure Euler-Bernoulli response
    pub fn new(flexural: &'a [f64], shear: Option<&'a [f64]>) -> Self {
        Self { flexural, shear }
    }
}

/// Shear and moment at every station from the superposed loads.
///
/// Reactions must be included in `loads` as point forces.
pub fn internal_forces(loads: &[Load], num_stations: usize) -> (Vec<f64>, Vec<f64>) {
    let mut shear = vec![0.0; num_stations];
    let mut moment = vec![0.0; num_stations];

    for load in loads {
        let (start, _) = load.extent();
        // Nothing to the left of the load's start
        let first = start.ceil().max(0.0) as usize;
        for station in first..num_stations {
            let x = station as f64;
            shear[station] += load.shear_at(x);
            moment[station] += load.moment_at(x);
        }
    }

    (shear, moment)
}

/// Slope and deflection with both integration constants set to zero.
///
/// Slope is the integral of curvature `M / EI`, less the shear strain
/// `V / GA` wherever G·A is finite. Deflection is the integral of slope.
pub fn raw_deformation(shear: &[f64], moment: &[f64], stiffness: &Stiffness<'_>) -> (Vec<f64>, Vec<f64>) {
    let curvature: Vec<f64> = moment
        .iter()
        .zip(stiffness.flexural)
        .map(|(m, ei)| m / ei)
        .collect();

    let mut slope = cumulative_trapezoid(&curvature);
    if let Some(ga) = stiffness.shear {
        for ((theta, v), ga) in slope.iter_mut().zip(shear).zip(ga) {
            if ga.is_finite() {
                *theta -= v / ga;
            }
        }
    }

    let deflection = cumulative_trapezoid(&slope);
    (slope, deflection)
}

/// Add the rigid-body line `c1·x + c2` that best zeroes the deflection at
/// `stations` in the least-squares sense. Two stations are matched exactly.
pub fn fit_to_stations(slope: &mut [f64], deflection: &mut [f64], stations: &[usize]) {
    if stations.is_empty() {
        return;
    }

    let n = stations.len() as f64;
    let mean_x = stations.iter().map(|&s| s as f64).sum::<f64>() / n;
    let mean_y = stations.iter().map(|&s| deflection[s]).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &s in stations {
        let dx = s as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (deflection[s] - mean_y);
    }

    let c1 = if sxx > 0.0 { -sxy / sxx } else { 0.0 };
    let c2 = -(mean_y + c1 * mean_x);

    for (i, (theta, y)) in slope.iter_mut().zip(deflection.iter_mut()).enumerate() {
        *theta += c1;
        *y += c1 * i as f64 + c2;
    }
}

/// Bending strain at a fiber `distance` from the neutral axis
pub fn fiber_strain(moment: &[f64], flexural: &[f64], distance: &[f64]) -> Vec<f64> {
    moment
        .iter()
        .zip(flexural)
        .zip(distance)
        .map(|((m, ei), d)| -m * d / ei)
        .collect()
}
