//! Beam Solver Example - overhanging bar, stepped shaft and failure checks

use anyhow::Result;
use beam_solver::prelude::*;

const N_PER_LBF: f64 = 4.448;
const MM_PER_IN: f64 = 25.4;

fn main() -> Result<()> {
    env_logger::init();

    overhanging_bar()?;
    stepped_shaft()?;
    failure_check()?;

    Ok(())
}

/// Rectangular bar with a point load on the overhang and a distributed load
/// between the supports.
fn overhanging_bar() -> Result<()> {
    println!("=== Overhanging bar (xy plane) ===\n");

    // Steel, MPa
    let material = Material::new(190_000.0, 73_100.0);
    let section = Section::rectangular((0.25 * 304.8_f64).round(), (0.75 * 304.8_f64).round());
    let profile = SectionProfile::uniform(1016, &material, &section);

    let model = BeamModel::new(profile)
        .with_support(254.0)?
        .with_support(1016.0)?
        .with_load(PointLoad::new(-8006.799, 0.0))?
        .with_load(DistributedLoad::new(-40033.99, 254.0, 1016.0))?;

    let result = BeamSolver::default().solve(&model)?;

    let reactions_lb: Vec<f64> = result
        .reaction_forces()
        .iter()
        .map(|r| r / N_PER_LBF)
        .collect();
    println!("Reaction forces in y-direction: {:?} lb", reactions_lb);

    let max_shear = result.max_abs_shear();
    let max_moment = result.max_abs_moment();
    println!(
        "Max shear: {:.3} kip at {:.2} ft",
        max_shear.value / (1000.0 * N_PER_LBF),
        max_shear.position / 304.8
    );
    println!(
        "Max moment: {:.3} kip-ft at {:.2} ft",
        max_moment.value / (1000.0 * N_PER_LBF) / 304.8,
        max_moment.position / 304.8
    );

    println!("\nSummary:\n{}\n", serde_json::to_string_pretty(&result.summary())?);
    Ok(())
}

/// Stepped countershaft with two spur gears on two bearings
fn stepped_shaft() -> Result<()> {
    println!("=== Stepped shaft ===\n");

    let material = Material::steel_mpa();
    let change_locations: Vec<f64> = [3.0, 9.0, 11.0, 11.0].iter().map(|x| x * MM_PER_IN).collect();
    let profile =
        SectionProfile::stepped_shaft(&material, &[90.0, 95.0, 72.0, 35.0], &change_locations)?;

    let bearings = [0.0, (11.0 * MM_PER_IN).round()];
    let gears = [(3.0 * MM_PER_IN).round(), (9.0 * MM_PER_IN).round()];

    let gear3 = GearMesh::from_degrees(1330.0 * N_PER_LBF, 20.0);
    let gear4 = GearMesh::from_degrees(3326.0 * N_PER_LBF, 20.0);

    let loads_xy = [Load::Point(PointLoad::new(gear3.tangential(), gears[1]))];
    let loads_xz = [
        Load::Point(PointLoad::new(-gear3.radial(), gears[1])),
        Load::Point(PointLoad::new(-gear4.tangential(), gears[0])),
    ];

    let shaft = ShaftAnalysis::new(profile, &bearings)?;
    let result = shaft.solve(&loads_xy, &loads_xz)?;

    for (plane, solved) in [("xy", &result.xy), ("xz", &result.xz)] {
        let reactions_lb: Vec<f64> = solved
            .reaction_forces()
            .iter()
            .map(|r| r / N_PER_LBF)
            .collect();
        println!("Reaction forces ({plane} plane): {:?} lb", reactions_lb);

        let points = [
            ("bearing", bearings[0]),
            ("bearing", bearings[1]),
            ("gear", gears[0]),
            ("gear", gears[1]),
        ];
        for (label, x) in points {
            if let Some(station) = solved.at(x) {
                println!(
                    "  {label} at {:.1} in: slope {:.6} rad, deflection {:.6} in",
                    x / MM_PER_IN,
                    station.slope,
                    station.deflection / MM_PER_IN
                );
            }
        }
    }

    for x in gears {
        if let Some(station) = result.at(x) {
            println!(
                "Resultant at gear {:.1} in: moment {:.1} lb-in, deflection {:.6} in",
                x / MM_PER_IN,
                station.moment / N_PER_LBF / MM_PER_IN,
                station.deflection / MM_PER_IN
            );
        }
    }
    println!();
    Ok(())
}

/// Failure theories for a uniaxial stress state (kpsi)
fn failure_check() -> Result<()> {
    println!("=== Failure theories ===\n");

    let stress = StressTensor::uniaxial(83.9);
    let assessment = assess(&stress, &Strengths::new(490.0, 45.0, 45.0))?;

    let p = assessment.principal;
    println!("Principal stresses: [{:.3}, {:.3}, {:.3}]", p.s1, p.s2, p.s3);
    for criterion in assessment.criteria() {
        match criterion.factor_of_safety {
            Some(n) => println!("{:?} factor of safety = {:.3}", criterion.criterion, n),
            None => println!("{:?} predicts failure", criterion.criterion),
        }
    }

    Ok(())
}
