//! Mean anomaly → eccentric anomaly → true anomaly → radius.
//!
//! The default strategy reproduces the classic textbook loop: ten
//! fixed-point steps of `E = M + e sin E` with no convergence check. This is a
//! simplification, not a converged solve. The error after `k` steps is bounded
//! by `e^(k+1)`, so ten steps reach machine precision only for e below about
//! 0.03, stay under 1e-6 rad up to e ≈ 0.25 and drift for more elongated
//! orbits. [`SolveStrategy::Newton`] solves to a tolerance instead.

use tracing::warn;

use crate::astro::elliptic;
use crate::constants::DEFAULT_FIXED_POINT_ITERATIONS;
use crate::math::{fixed_point, newton_approx};
use crate::{Num, OrbitParameters};

/// How the eccentric anomaly is obtained from the mean anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStrategy {
    /// Skip Kepler's equation and use `E = M`. The body sweeps the ellipse at a
    /// uniform parametric angle, which is not physical for e > 0.
    UniformAngle,
    /// Fixed number of `E = M + e sin E` steps.
    FixedPoint { iterations: u32 },
    /// Newton-Raphson on `E - e sin E - M = 0` until the step drops below
    /// `tolerance`.
    Newton { tolerance: Num, max_iterations: u32 },
}

impl Default for SolveStrategy {
    fn default() -> Self {
        SolveStrategy::FixedPoint {
            iterations: DEFAULT_FIXED_POINT_ITERATIONS,
        }
    }
}

impl SolveStrategy {
    pub const fn newton() -> Self {
        SolveStrategy::Newton {
            tolerance: 1e-12,
            max_iterations: 50,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnomalyState {
    pub mean_anomaly: Num,
    pub eccentric_anomaly: Num,
    pub true_anomaly: Num,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalySolution {
    pub anomalies: AnomalyState,
    /// Distance from the star
    pub radius: Num,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalySolver {
    semi_major_axis: Num,
    eccentricity: Num,
    strategy: SolveStrategy,
}

impl AnomalySolver {
    pub fn new(orbit: &OrbitParameters, strategy: SolveStrategy) -> Self {
        Self {
            semi_major_axis: orbit.semi_major_axis(),
            eccentricity: orbit.eccentricity(),
            strategy,
        }
    }

    pub fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    pub fn eccentric_anomaly(&self, M: Num) -> Num {
        let e = self.eccentricity;

        match self.strategy {
            SolveStrategy::UniformAngle => M,
            SolveStrategy::FixedPoint { iterations } => {
                fixed_point(|E| elliptic::kepler_fixed_point(M, e, E), M, iterations)
            }
            SolveStrategy::Newton {
                tolerance,
                max_iterations,
            } => {
                // Danby's starting value, the root lies within e of M
                let x0 = M + 0.85 * e * M.sin().signum();

                let approx = newton_approx(
                    |E| elliptic::kepler_residual(M, e, E),
                    |E| elliptic::kepler_residual_derivative(e, E),
                    x0,
                    tolerance,
                    max_iterations,
                );

                if !approx.converged {
                    warn!(
                        M,
                        e,
                        iterations = approx.iterations,
                        "Kepler's equation did not converge, using last estimate"
                    );
                }

                approx.value
            }
        }
    }

    pub fn solve(&self, M: Num) -> AnomalySolution {
        let e = self.eccentricity;

        let E = self.eccentric_anomaly(M);
        let v = elliptic::true_anomaly(E, e);

        AnomalySolution {
            anomalies: AnomalyState {
                mean_anomaly: M,
                eccentric_anomaly: E,
                true_anomaly: v,
            },
            radius: elliptic::radius(self.semi_major_axis, e, v),
        }
    }
}

#[cfg(all(test, feature = "f64"))]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::constants::{AU, SECONDS_PER_YEAR};

    fn solver(e: Num, strategy: SolveStrategy) -> AnomalySolver {
        let orbit = OrbitParameters::new(AU, e, SECONDS_PER_YEAR).unwrap();
        AnomalySolver::new(&orbit, strategy)
    }

    #[test_case(SolveStrategy::default() ; "fixed point")]
    #[test_case(SolveStrategy::newton() ; "newton")]
    #[test_case(SolveStrategy::UniformAngle ; "uniform angle")]
    fn circular_orbit_is_identity(strategy: SolveStrategy) {
        let solver = solver(0.0, strategy);

        for i in -20..20 {
            let M = i as Num * 0.3;
            let solution = solver.solve(M);

            assert_eq!(solution.anomalies.eccentric_anomaly, M);
            assert!((solution.anomalies.true_anomaly - M).abs() < 1e-12);
            assert_eq!(solution.radius, AU);
        }
    }

    #[test]
    fn fixed_point_satisfies_keplers_equation_for_small_e() {
        let solver = solver(0.0167, SolveStrategy::default());

        for i in 0..100 {
            let M = i as Num * 0.07;
            let E = solver.eccentric_anomaly(M);

            assert!(elliptic::kepler_residual(M, 0.0167, E).abs() < 1e-12);
        }
    }

    #[test_case(0.1)]
    #[test_case(0.3)]
    #[test_case(0.5)]
    fn newton_agrees_with_fixed_point(e: Num) {
        let fixed = solver(e, SolveStrategy::default());
        let newton = solver(e, SolveStrategy::newton());
        let bound = e.powi(11) * 2.0 + 1e-12;

        for i in 0..64 {
            let M = i as Num * 0.1;
            let diff = (fixed.eccentric_anomaly(M) - newton.eccentric_anomaly(M)).abs();

            assert!(diff <= bound, "M = {M}, diff = {diff}, bound = {bound}");
        }
    }

    #[test]
    fn newton_handles_very_elongated_orbits() {
        let e = 0.97;
        let newton = solver(e, SolveStrategy::newton());

        for i in -30..30 {
            let M = i as Num * 0.11;
            let E = newton.eccentric_anomaly(M);

            assert!(elliptic::kepler_residual(M, e, E).abs() < 1e-9, "M = {M}");
        }
    }

    #[test]
    fn uniform_angle_radius_is_linear_in_cos_m() {
        let e = 0.5;
        let solver = solver(e, SolveStrategy::UniformAngle);

        for i in 0..32 {
            let M = i as Num * 0.2;
            let expected = AU * (1.0 - e * M.cos());

            assert!((solver.solve(M).radius - expected).abs() / AU < 1e-12);
        }
    }
}
