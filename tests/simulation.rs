#![cfg(feature = "f64")]

use kepler_trajectory::{
    LengthUnit, Num, OrbitError, Simulation, SimulationConfig, SolveStrategy,
};

#[test]
fn keplerian_motion_lingers_near_aphelion() {
    let report = Simulation::run(&SimulationConfig::elongated().without_fit()).unwrap();
    let orbit = report.orbit();

    let far_side = report
        .trajectory
        .samples()
        .iter()
        .filter(|s| s.position.x < -orbit.focus_offset())
        .count();

    // Kepler's second law: (π + 2e) / 2π of the period is spent beyond the
    // minor axis on the aphelion side, about 66% for e = 0.5
    assert!(far_side * 100 > report.trajectory.len() * 62, "far side = {far_side}");
}

#[test]
fn uniform_angle_spends_half_the_time_on_each_side() {
    let config = SimulationConfig::elongated()
        .with_strategy(SolveStrategy::UniformAngle)
        .without_fit();
    let report = Simulation::run(&config).unwrap();
    let orbit = report.orbit();

    let far_side = report
        .trajectory
        .samples()
        .iter()
        .filter(|s| s.position.x < -orbit.focus_offset())
        .count();

    let half = report.trajectory.len() / 2;
    assert!(far_side.abs_diff(half) <= 2, "far side = {far_side}");
}

#[test]
fn strategies_share_apsides() {
    for strategy in [
        SolveStrategy::UniformAngle,
        SolveStrategy::default(),
        SolveStrategy::newton(),
    ] {
        let config = SimulationConfig::default()
            .with_strategy(strategy)
            .without_fit();
        let report = Simulation::run(&config).unwrap();
        let distances = report.trajectory.distances(LengthUnit::AstronomicalUnit);

        let min = distances.iter().cloned().fold(Num::INFINITY, Num::min);
        let max = distances.iter().cloned().fold(Num::NEG_INFINITY, Num::max);

        assert!((min - (1.0 - 0.0167)).abs() < 1e-4, "{strategy:?}: min = {min}");
        assert!((max - (1.0 + 0.0167)).abs() < 1e-4, "{strategy:?}: max = {max}");
    }
}

#[test]
fn elongated_orbit_fit_converges_but_is_implausible() {
    let report = Simulation::run(&SimulationConfig::elongated()).unwrap();
    let fit = report.fit.unwrap();
    let distances = report.trajectory.distances(LengthUnit::Kilometer);

    assert!(fit.residual_sum_of_squares.is_finite());
    assert!(!fit.is_plausible(&distances), "{fit}");
}

#[test]
fn very_elongated_orbit_fit_fails() {
    let config = SimulationConfig {
        eccentricity: 0.7,
        ..Default::default()
    };

    let err = Simulation::run(&config).unwrap_err();

    assert!(err.is_fit_failure(), "{err}");
    assert!(matches!(err, OrbitError::FitFailure(_)));
}
