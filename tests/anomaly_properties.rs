#![allow(non_snake_case)]
#![cfg(feature = "f64")]

use kepler_trajectory::constants::{AU, SECONDS_PER_YEAR};
use kepler_trajectory::math::wrap_angle;
use kepler_trajectory::{AnomalySolver, Num, OrbitParameters, SolveStrategy, PI, TWO_PI};
use test_case::test_case;

const SWEEP: usize = 500;

fn solver(a: Num, e: Num, strategy: SolveStrategy) -> AnomalySolver {
    let orbit = OrbitParameters::new(a, e, SECONDS_PER_YEAR).unwrap();
    AnomalySolver::new(&orbit, strategy)
}

fn strategies() -> [SolveStrategy; 3] {
    [
        SolveStrategy::default(),
        SolveStrategy::newton(),
        SolveStrategy::UniformAngle,
    ]
}

#[test]
fn circular_orbit_identity() {
    for strategy in strategies() {
        let a = rand::random_range(1.0..1e12);
        let solver = solver(a, 0.0, strategy);

        for _ in 0..SWEEP {
            let M = rand::random_range(-TWO_PI..TWO_PI);
            let solution = solver.solve(M);

            assert_eq!(solution.anomalies.eccentric_anomaly, M);
            assert!(
                (solution.anomalies.true_anomaly - M).abs() < 1e-12,
                "M = {M}, v = {}",
                solution.anomalies.true_anomaly
            );
            assert!((solution.radius - a).abs() <= a * 1e-15);
        }
    }
}

#[test]
fn radius_stays_between_apsides() {
    for strategy in strategies() {
        for _ in 0..SWEEP {
            let e = rand::random_range(0.0..0.99);
            let a = rand::random_range(1.0..1e12);
            let M = rand::random_range(-100.0..100.0);

            let r = solver(a, e, strategy).solve(M).radius;
            let slack = a * 1e-12;

            assert!(r >= a * (1.0 - e) - slack, "r = {r}, a = {a}, e = {e}");
            assert!(r <= a * (1.0 + e) + slack, "r = {r}, a = {a}, e = {e}");
        }
    }
}

#[test]
fn mean_anomaly_is_periodic() {
    for strategy in strategies() {
        for _ in 0..SWEEP {
            let e = rand::random_range(0.0..0.9);
            let M = rand::random_range(-20.0..20.0);
            let solver = solver(AU, e, strategy);

            let first = solver.solve(M);
            let shifted = solver.solve(M + TWO_PI);

            let dv = wrap_angle(shifted.anomalies.true_anomaly - first.anomalies.true_anomaly);
            assert!(dv.abs() < 1e-6, "e = {e}, M = {M}, dv = {dv}");
            assert!((shifted.radius - first.radius).abs() / AU < 1e-9);
        }
    }
}

#[test]
fn orbit_is_symmetric_about_major_axis() {
    for strategy in strategies() {
        for _ in 0..SWEEP {
            let e = rand::random_range(0.0..0.99);
            let M = rand::random_range(-3.0..3.0);
            let solver = solver(AU, e, strategy);

            let forward = solver.solve(M).anomalies.true_anomaly;
            let backward = solver.solve(-M).anomalies.true_anomaly;

            assert!((forward + backward).abs() < 1e-12, "e = {e}, M = {M}");
        }
    }
}

#[test_case(0.0, 1.47102e11 ; "perihelion")]
#[test_case(PI, 1.52099e11 ; "aphelion")]
fn earth_apsides(M: Num, expected: Num) {
    let solution = solver(1.496e11, 0.0167, SolveStrategy::default()).solve(M);

    assert!(
        (solution.radius - expected).abs() / expected < 1e-3,
        "r = {}",
        solution.radius
    );
}

#[test]
fn earth_perihelion_anomalies_are_zero() {
    let solution = solver(1.496e11, 0.0167, SolveStrategy::default()).solve(0.0);

    assert_eq!(solution.anomalies.eccentric_anomaly, 0.0);
    assert_eq!(solution.anomalies.true_anomaly, 0.0);
}

#[test]
fn earth_aphelion_anomalies_are_pi() {
    let solution = solver(1.496e11, 0.0167, SolveStrategy::default()).solve(PI);

    assert!((solution.anomalies.eccentric_anomaly - PI).abs() < 1e-12);
    assert!((solution.anomalies.true_anomaly.abs() - PI).abs() < 1e-9);
}
