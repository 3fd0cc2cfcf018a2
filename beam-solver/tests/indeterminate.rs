use approx::assert_relative_eq;
use beam_solver::prelude::*;

fn prismatic(length: usize) -> SectionProfile {
    let material = Material::new(200_000.0, 80_000.0);
    SectionProfile::uniform(length, &material, &Section::rectangular(50.0, 120.0)).without_shear()
}

fn supported(length: usize, supports: &[f64]) -> BeamModel {
    let mut model = BeamModel::new(prismatic(length));
    for &s in supports {
        model.add_support(s).unwrap();
    }
    model
}

#[test]
fn two_equal_spans_under_uniform_load() {
    let model = supported(800, &[0.0, 400.0, 800.0])
        .with_load(DistributedLoad::new(-800.0, 0.0, 800.0))
        .unwrap();

    let result = model.solve().unwrap();
    let r = result.reaction_forces();

    // 3/16, 10/16, 3/16 of the total load
    assert!(result.redundant);
    assert_relative_eq!(r[0], 150.0, max_relative = 2e-3);
    assert_relative_eq!(r[1], 500.0, max_relative = 2e-3);
    assert_relative_eq!(r[2], 150.0, max_relative = 2e-3);
    assert_relative_eq!(r[0], r[2], max_relative = 1e-9);
}

#[test]
fn unequal_spans_match_three_moment_equation() {
    // Spans 300 and 500, w = 1 per unit downward
    let model = supported(800, &[0.0, 300.0, 800.0])
        .with_load(DistributedLoad::from_intensity(-1.0, 0.0, 800.0))
        .unwrap();
    let result = model.solve().unwrap();
    let r = result.reaction_forces();

    // M_B = -w (L1³ + L2³) / (8 (L1 + L2))
    let m_b = -(300.0_f64.powi(3) + 500.0_f64.powi(3)) / (8.0 * 800.0);
    let r_a = 150.0 + m_b / 300.0;
    let r_c = 250.0 + m_b / 500.0;

    assert_relative_eq!(result.moment[300], m_b, max_relative = 2e-3);
    assert_relative_eq!(r[0], r_a, max_relative = 2e-3);
    assert_relative_eq!(r[2], r_c, max_relative = 2e-3);
    assert_relative_eq!(r[1], 800.0 - r_a - r_c, max_relative = 2e-3);
}

#[test]
fn deflection_vanishes_at_every_support() {
    let model = supported(1200, &[0.0, 250.0, 700.0, 1000.0, 1200.0])
        .with_loads([
            Load::from(PointLoad::new(-5000.0, 120.0)),
            Load::from(PointLoad::new(-3000.0, 850.0)),
            Load::from(DistributedLoad::new(-6000.0, 300.0, 1100.0)),
        ])
        .unwrap();

    for solver in [
        BeamSolver::default(),
        BeamSolver::new(SolverOptions::euler_bernoulli()),
    ] {
        let result = solver.solve(&model).unwrap();
        let scale = result.max_abs_deflection().value.abs();
        assert!(scale > 0.0);

        for reaction in &result.reactions {
            assert!(
                result.deflection[reaction.station].abs() <= 1e-8 * scale,
                "deflection {} at support {}",
                result.deflection[reaction.station],
                reaction.position
            );
        }

        assert!(result.force_residual().abs() <= 1e-9 * 14_000.0);
        assert!(result.moment_residual().abs() <= 1e-9 * 14_000.0 * 1200.0);
    }
}

#[test]
fn redundant_solve_is_linear_in_loads() {
    // Deeper section on (300, 600]
    let material = Material::new(200_000.0, 80_000.0);
    let profile = SectionProfile::uniform(900, &material, &Section::rectangular(50.0, 120.0))
        .with_segment(300.0, 600.0, &material, &Section::rectangular(50.0, 180.0))
        .unwrap();
    let base = BeamModel::new(profile)
        .with_support(0.0)
        .unwrap()
        .with_support(300.0)
        .unwrap()
        .with_support(650.0)
        .unwrap()
        .with_support(900.0)
        .unwrap();

    let set_a = [
        Load::from(PointLoad::new(-4000.0, 150.0)),
        Load::from(PointLoad::new(2500.0, 800.0)),
    ];
    let set_b = [Load::from(DistributedLoad::new(-9000.0, 200.0, 700.0))];
    let both: Vec<Load> = set_a.iter().chain(&set_b).copied().collect();

    let a = base.with_replaced_loads(&set_a).unwrap().solve().unwrap();
    let b = base.with_replaced_loads(&set_b).unwrap().solve().unwrap();
    let together = base.with_replaced_loads(&both).unwrap().solve().unwrap();
    let separate = a.superpose(&b).unwrap();

    assert!(together.redundant);
    let scale = together.max_abs_deflection().value.abs();
    for i in 0..together.num_stations() {
        assert_relative_eq!(separate.deflection[i], together.deflection[i], epsilon = 1e-9 * scale);
        assert_relative_eq!(separate.moment[i], together.moment[i], epsilon = 1e-4);
    }
    for (s, t) in separate.reactions.iter().zip(&together.reactions) {
        assert_relative_eq!(s.force, t.force, epsilon = 1e-9 * 15_500.0);
    }

    // Scaling every load scales the response
    let doubled: Vec<Load> = both.iter().map(|l| l.scaled(2.0)).collect();
    let twice = base.with_replaced_loads(&doubled).unwrap().solve().unwrap();
    for (t2, t) in twice.reactions.iter().zip(&together.reactions) {
        assert_relative_eq!(t2.force, 2.0 * t.force, epsilon = 1e-9 * 31_000.0);
    }
    assert_relative_eq!(twice.deflection[450], 2.0 * together.deflection[450], epsilon = 1e-9 * scale);
}

#[test]
fn tighter_singular_tolerance_rejects_adjacent_supports() {
    // Interior supports one station apart give a nearly singular flexibility matrix
    let model = supported(1000, &[0.0, 500.0, 501.0, 1000.0])
        .with_load(PointLoad::new(-100.0, 250.0))
        .unwrap();

    let default = BeamSolver::default().solve(&model).unwrap();
    let scale = default.max_abs_deflection().value.abs();
    assert!(default.deflection[501].abs() <= 1e-6 * scale);

    let strict = BeamSolver::new(SolverOptions::default().with_singular_tolerance(1e-3));
    assert!(matches!(strict.solve(&model), Err(BeamError::StaticallyUnstable(_))));
}

#[test]
fn shear_deformation_changes_redundant_reactions() {
    // A stocky section, so G·A matters
    let material = Material::new(200_000.0, 80_000.0);
    let profile = SectionProfile::uniform(300, &material, &Section::rectangular(100.0, 150.0));
    let model = BeamModel::new(profile)
        .with_support(0.0)
        .unwrap()
        .with_support(100.0)
        .unwrap()
        .with_support(300.0)
        .unwrap()
        .with_load(PointLoad::new(-1000.0, 200.0))
        .unwrap();

    let timoshenko = BeamSolver::default().solve(&model).unwrap();
    let bending = BeamSolver::new(SolverOptions::euler_bernoulli())
        .solve(&model)
        .unwrap();

    let diff = (timoshenko.reactions[1].force - bending.reactions[1].force).abs();
    assert!(diff > 1e-6 * 1000.0);

    let scale = timoshenko.max_abs_deflection().value.abs();
    for reaction in &timoshenko.reactions {
        assert!(timoshenko.deflection[reaction.station].abs() <= 1e-8 * scale);
    }
}

#[test]
fn supports_sharing_a_station_are_unstable() {
    let model = supported(1000, &[0.0, 500.0, 500.3, 1000.0])
        .with_load(PointLoad::new(-100.0, 250.0))
        .unwrap();
    assert!(matches!(model.solve(), Err(BeamError::StaticallyUnstable(_))));

    // An interior support snapping onto an end support as well
    let model = supported(1000, &[0.0, 0.2, 1000.0])
        .with_load(PointLoad::new(-100.0, 250.0))
        .unwrap();
    assert!(matches!(model.solve(), Err(BeamError::StaticallyUnstable(_))));
}

#[test]
fn snapped_support_acts_at_nearest_station() {
    let model = supported(100, &[0.0, 49.6, 100.0])
        .with_load(DistributedLoad::new(-100.0, 0.0, 100.0))
        .unwrap();
    let result = model.solve().unwrap();

    assert_eq!(result.reactions[1].station, 50);
    assert_eq!(result.reactions[1].position, 50.0);
    assert_relative_eq!(result.reactions[0].force, result.reactions[2].force, max_relative = 1e-9);
}

#[test]
fn solve_all_keeps_model_order() {
    let solver = BeamSolver::default();
    let models = vec![
        supported(200, &[0.0, 200.0])
            .with_load(PointLoad::new(-10.0, 100.0))
            .unwrap(),
        supported(200, &[0.0, 100.0, 200.0])
            .with_load(PointLoad::new(-10.0, 50.0))
            .unwrap(),
    ];

    let results = solver.solve_all(&models).unwrap();
    assert_eq!(results.len(), 2);
    assert!(!results[0].redundant);
    assert!(results[1].redundant);
    assert_eq!(results[1], solver.solve(&models[1]).unwrap());

    let mut bad = models.clone();
    bad[1].supports.truncate(1);
    assert!(matches!(solver.solve_all(&bad), Err(BeamError::InvalidSupport(_))));
}

#[test]
fn result_round_trips_through_json() {
    let result = supported(100, &[0.0, 50.0, 100.0])
        .with_load(PointLoad::new(-10.0, 25.0))
        .unwrap()
        .solve()
        .unwrap();

    let json = result.to_json().unwrap();
    let parsed: SolveResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.reactions.len(), 3);
    assert_eq!(parsed.num_stations(), 101);
    assert_relative_eq!(parsed.reactions[1].force, result.reactions[1].force, max_relative = 1e-15);
}
