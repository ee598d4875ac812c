use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::units::{LengthUnit, TimeUnit};
use crate::{
    fit_sinusoid, FitReport, Labels, Num, OrbitParameters, SimulationConfig, SinusoidParams,
    Trajectory,
};

/// Units the distance curve is fitted in. B then comes out in rad/day.
pub const FIT_LENGTH_UNIT: LengthUnit = LengthUnit::Kilometer;
pub const FIT_TIME_UNIT: TimeUnit = TimeUnit::Day;

/// Samples the orbit and fits the distance curve in one pass.
pub struct Simulation;

impl Simulation {
    pub fn run(config: &SimulationConfig) -> Result<SimulationReport> {
        let _span = info_span!("simulation", strategy = ?config.strategy).entered();

        let orbit = config.orbit()?;
        let trajectory = Trajectory::sample(orbit, config.strategy, config.sample_count)?;

        info!(
            a = orbit.semi_major_axis(),
            e = orbit.eccentricity(),
            samples = trajectory.len(),
            "Computed trajectory"
        );

        let fit = match &config.fit {
            Some(options) => {
                let times = trajectory.times(FIT_TIME_UNIT);
                let distances = trajectory.distances(FIT_LENGTH_UNIT);

                let guess = SinusoidParams::initial_guess(
                    &distances,
                    FIT_TIME_UNIT.from_seconds(orbit.period()),
                    FIT_LENGTH_UNIT.from_meters(orbit.semi_major_axis()),
                );

                let report = fit_sinusoid(&times, &distances, guess, options)?;

                if !report.is_plausible(&distances) {
                    warn!(%report, "Fitted parameters look implausible");
                }

                Some(report)
            }
            None => None,
        };

        Ok(SimulationReport {
            config: *config,
            trajectory,
            fit,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub trajectory: Trajectory,
    pub fit: Option<FitReport>,
}

impl SimulationReport {
    pub fn orbit(&self) -> &OrbitParameters {
        self.trajectory.orbit()
    }

    pub fn labels(&self) -> &'static Labels {
        self.config.locale.labels()
    }

    /// Orbit in AU, for an equal-aspect chart with the star at the origin
    pub fn orbit_series(&self) -> Vec<[Num; 2]> {
        self.trajectory.positions(LengthUnit::AstronomicalUnit)
    }

    /// Line segments from the star to every `step`-th sample, in AU
    pub fn spoke_series(&self, step: usize) -> Vec<[[Num; 2]; 2]> {
        let factor = 1.0 / LengthUnit::AstronomicalUnit.meters();

        self.trajectory
            .spokes(step)
            .map(|s| [[0.0, 0.0], s.scaled(factor).to_array()])
            .collect()
    }

    /// (days, Gm)
    pub fn distance_series(&self) -> Vec<[Num; 2]> {
        zip_series(
            &self.trajectory.times(TimeUnit::Day),
            &self.trajectory.distances(LengthUnit::Gigameter),
        )
    }

    /// (mean anomaly in rad, km)
    pub fn distance_angle_series(&self) -> Vec<[Num; 2]> {
        zip_series(
            &self.trajectory.mean_anomalies(),
            &self.trajectory.distances(LengthUnit::Kilometer),
        )
    }

    /// Fitted curve as (days, Gm)
    pub fn fitted_series(&self) -> Option<Vec<[Num; 2]>> {
        let fit = self.fit.as_ref()?;
        let times = self.trajectory.times(FIT_TIME_UNIT);

        let gigameters = fit
            .params
            .evaluate_all(&times)
            .into_iter()
            .map(|d| LengthUnit::Gigameter.from_meters(FIT_LENGTH_UNIT.to_meters(d)))
            .collect::<Vec<_>>();

        Some(zip_series(&times, &gigameters))
    }

    /// The two console lines describing the fit
    pub fn fit_summary(&self) -> Option<[String; 2]> {
        let fit = self.fit.as_ref()?;
        let labels = self.labels();
        let SinusoidParams {
            amplitude: A,
            angular_frequency: B,
            phase: C,
            offset: D,
        } = fit.params;

        Some([
            format!(
                "{}: A = {A} km, B = {B} rad/day, C = {C} rad, D = {D} km",
                labels.fitted_parameters
            ),
            format!(
                "{}: distance(t) = {} km",
                labels.sinusoidal_equation,
                fit.params.equation()
            ),
        ])
    }
}

fn zip_series(xs: &[Num], ys: &[Num]) -> Vec<[Num; 2]> {
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}

#[cfg(all(test, feature = "f64"))]
mod tests {
    use nalgebra::{Matrix3, Vector3};

    use super::*;
    use crate::{FitFailureKind, Locale, OrbitError, SolveStrategy, TWO_PI};

    /// Least-squares residual of `A sin(Bt + C) + D` with `B` held fixed. The
    /// model is then linear in `(A cos C, A sin C, D)`.
    fn pinned_frequency_residual(times: &[Num], values: &[Num], B: Num) -> Num {
        let basis = |t: Num| {
            let (sin, cos) = (B * t).sin_cos();
            Vector3::new(sin, cos, 1.0)
        };

        let mut lhs = Matrix3::zeros();
        let mut rhs = Vector3::zeros();
        for (&t, &y) in times.iter().zip(values) {
            let row = basis(t);
            lhs += row * row.transpose();
            rhs += row * y;
        }
        let coefficients = lhs.lu().solve(&rhs).unwrap();

        times
            .iter()
            .zip(values)
            .map(|(&t, &y)| (y - coefficients.dot(&basis(t))).powi(2))
            .sum()
    }

    #[test]
    fn default_run_fits_at_least_as_well_as_one_cycle_per_year() {
        let report = Simulation::run(&SimulationConfig::default()).unwrap();
        let fit = report.fit.unwrap();
        let times = report.trajectory.times(FIT_TIME_UNIT);
        let distances = report.trajectory.distances(FIT_LENGTH_UNIT);

        let one_cycle_per_year = TWO_PI / 365.25;
        let pinned = pinned_frequency_residual(&times, &distances, one_cycle_per_year);
        assert!(
            fit.residual_sum_of_squares <= pinned,
            "fitted {} > pinned {pinned}",
            fit.residual_sum_of_squares
        );
        assert!(fit.is_plausible(&distances));

        // The a·e²/2 second harmonic pulls the optimum about 1% below 2π/T
        let b = fit.params.angular_frequency;
        assert!((b / one_cycle_per_year - 1.0).abs() < 0.02, "B = {b}");
        assert!((fit.params.offset / 1.496e8 - 1.0).abs() < 0.01);
    }

    #[test]
    fn uniform_angle_profile_is_an_exact_sinusoid() {
        let report = Simulation::run(&SimulationConfig::approximate()).unwrap();
        let fit = report.fit.unwrap();

        assert!(fit.rms_residual < 1.0, "rms = {} km", fit.rms_residual);
    }

    #[test]
    fn disabled_fit_produces_no_summary() {
        let report = Simulation::run(&SimulationConfig::default().without_fit()).unwrap();

        assert!(report.fit.is_none());
        assert!(report.fit_summary().is_none());
        assert!(report.fitted_series().is_none());
    }

    #[test]
    fn summary_lines() {
        let report = Simulation::run(&SimulationConfig::default()).unwrap();
        let [params, equation] = report.fit_summary().unwrap();

        assert!(params.starts_with("Fitted parameters: A = "));
        assert!(params.contains(" km, B = "));
        assert!(params.contains(" rad/day, C = "));
        assert!(params.ends_with(" km"));
        assert!(equation.starts_with("Sinusoidal equation: distance(t) = "));
        assert!(equation.ends_with(" km"));
    }

    #[test]
    fn korean_summary() {
        let config = SimulationConfig::default().with_locale(Locale::Korean);
        let report = Simulation::run(&config).unwrap();
        let [params, _] = report.fit_summary().unwrap();

        assert!(params.starts_with("피팅된 매개변수: "));
    }

    #[test]
    fn series_are_in_display_units() {
        let report = Simulation::run(&SimulationConfig::default()).unwrap();

        let orbit = report.orbit_series();
        assert!((orbit[0][0] - (1.0 - 0.0167)).abs() < 1e-6);

        let distances = report.distance_series();
        let last = distances[distances.len() - 1];
        assert!((last[0] - 365.25).abs() < 1e-9);
        assert!((140.0..160.0).contains(&last[1]));

        assert_eq!(report.spoke_series(100).len(), 10);
        assert_eq!(report.fitted_series().unwrap().len(), distances.len());
    }

    #[test]
    fn failed_fit_aborts_the_run() {
        let config = SimulationConfig {
            eccentricity: 0.7,
            ..Default::default()
        };

        assert!(matches!(
            Simulation::run(&config),
            Err(OrbitError::FitFailure(FitFailureKind::NotConverged { .. }))
        ));
        assert!(Simulation::run(&config.without_fit()).is_ok());
    }

    #[test]
    fn invalid_config_aborts() {
        let config = SimulationConfig {
            eccentricity: -0.2,
            strategy: SolveStrategy::newton(),
            ..Default::default()
        };

        assert!(matches!(
            Simulation::run(&config),
            Err(OrbitError::InvalidParameter { .. })
        ));
    }
}
