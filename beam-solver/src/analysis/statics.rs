//! Support reactions: closed-form statics and the flexibility method

use log::debug;

use super::integration::{fit_to_stations, internal_forces, raw_deformation, Stiffness};
use crate::elements::Support;
use crate::error::{BeamError, BeamResult};
use crate::loads::{Load, PointLoad};
use crate::math::{self, Mat, Vec as FEVec};

/// Reactions of a beam on two pinned supports from ΣF = 0 and ΣM = 0
/// about the left support.
pub fn determinate_reactions(loads: &[Load], left: usize, right: usize) -> BeamResult<(f64, f64)> {
    if left == right {
        return Err(BeamError::StaticallyUnstable(format!(
            "Both supports act at station {left}; the beam can rotate freely about it"
        )));
    }

    let xl = left as f64;
    let xr = right as f64;
    let total: f64 = loads.iter().map(Load::total_force).sum();
    let moment_left: f64 = loads.iter().map(|l| l.moment_about(xl)).sum();

    let r_right = -moment_left / (xr - xl);
    let r_left = -total - r_right;
    Ok((r_left, r_right))
}

/// Reactions of a beam on three or more pinned supports.
///
/// The outermost supports form a simply supported primary beam. For each
/// interior support `j` the deflection of the primary beam under a unit
/// force at `r_j` gives column `j` of the flexibility matrix. The redundant
/// reactions `R` then satisfy `F · R = -δ0`, where `δ0` is the primary
/// beam's deflection under the applied loads at the interior supports.
pub fn indeterminate_reactions(
    loads: &[Load],
    supports: &[Support],
    stiffness: &Stiffness<'_>,
    num_stations: usize,
    singular_tolerance: f64,
) -> BeamResult<Vec<f64>> {
    let first = supports[0].station;
    let last = supports[supports.len() - 1].station;
    let redundants: Vec<usize> = supports[1..supports.len() - 1]
        .iter()
        .map(|s| s.station)
        .collect();
    let m = redundants.len();

    debug!(
        "Flexibility solve: primary supports at stations {first} and {last}, {m} redundant(s) at {redundants:?}"
    );

    let load_deflection = primary_deflection(loads, first, last, stiffness, num_stations)?;

    let mut flexibility = Mat::zeros(m, m);
    for (j, &station) in redundants.iter().enumerate() {
        let unit = [Load::Point(PointLoad::new(1.0, station as f64))];
        let response = primary_deflection(&unit, first, last, stiffness, num_stations)?;
        for (i, &at) in redundants.iter().enumerate() {
            flexibility[(i, j)] = response[at];
        }
    }

    let rhs = FEVec::from_iterator(m, redundants.iter().map(|&at| -load_deflection[at]));
    let redundant_forces = math::solve_nonsingular(&flexibility, &rhs, singular_tolerance)
        .ok_or_else(|| {
            BeamError::StaticallyUnstable(format!(
                "Flexibility matrix for supports at stations {:?} is singular; supports may coincide",
                supports.iter().map(|s| s.station).collect::<Vec<_>>()
            ))
        })?;

    // Primary reactions balance the loads together with the redundants
    let mut with_redundants = loads.to_vec();
    with_redundants.extend(
        redundants
            .iter()
            .zip(redundant_forces.iter())
            .map(|(&at, &force)| Load::Point(PointLoad::new(force, at as f64))),
    );
    let (r_first, r_last) = determinate_reactions(&with_redundants, first, last)?;

    let mut reactions = Vec::with_capacity(supports.len());
    reactions.push(r_first);
    reactions.extend(redundant_forces.iter().copied());
    reactions.push(r_last);
    Ok(reactions)
}

/// Deflection of the simply supported primary beam under `loads`
fn primary_deflection(
    loads: &[Load],
    first: usize,
    last: usize,
    stiffness: &Stiffness<'_>,
    num_stations: usize,
) -> BeamResult<Vec<f64>> {
    let (r_first, r_last) = determinate_reactions(loads, first, last)?;

    let mut all = loads.to_vec();
    all.push(Load::Point(PointLoad::new(r_first, first as f64)));
    all.push(Load::Point(PointLoad::new(r_last, last as f64)));

    let (shear, moment) = internal_forces(&all, num_stations);
    let (mut slope, mut deflection) = raw_deformation(&shear, &moment, stiffness);
    fit_to_stations(&mut slope, &mut deflection, &[first, last]);
    Ok(deflection)
}
