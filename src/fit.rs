//! Least-squares fit of `A * sin(B * t + C) + D` to a sampled curve.
//!
//! Levenberg-Marquardt with Marquardt's diagonal scaling, so parameters of
//! very different magnitude (an amplitude of 1e6 km next to a frequency of
//! 1e-2 rad/day) share one damping factor.

use std::fmt;

use nalgebra::{Matrix4, Vector4};
use tracing::{debug, trace};

use crate::error::{FitFailureKind, Result};
use crate::{Num, TWO_PI};

/// Parameters of `A * sin(B * t + C) + D`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinusoidParams {
    /// A
    pub amplitude: Num,
    /// B
    pub angular_frequency: Num,
    /// C
    pub phase: Num,
    /// D
    pub offset: Num,
}

impl SinusoidParams {
    pub fn new(amplitude: Num, angular_frequency: Num, phase: Num, offset: Num) -> Self {
        Self {
            amplitude,
            angular_frequency,
            phase,
            offset,
        }
    }

    /// Half the data range as amplitude, one cycle per `period`, zero phase
    /// and `offset` as the vertical shift.
    pub fn initial_guess(values: &[Num], period: Num, offset: Num) -> Self {
        let (min, max) = values
            .iter()
            .fold((Num::INFINITY, Num::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });

        let amplitude = if values.is_empty() {
            0.0
        } else {
            (max - min) / 2.0
        };

        Self::new(amplitude, TWO_PI / period, 0.0, offset)
    }

    pub fn evaluate(&self, t: Num) -> Num {
        self.amplitude * (self.angular_frequency * t + self.phase).sin() + self.offset
    }

    pub fn evaluate_all(&self, times: &[Num]) -> Vec<Num> {
        times.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Coefficients in 3 significant digits of scientific notation, e.g.
    /// `2.50e6 * sin(1.72e-2 * t + -1.57e0) + 1.50e8`.
    pub fn equation(&self) -> String {
        format!(
            "{:.2e} * sin({:.2e} * t + {:.2e}) + {:.2e}",
            self.amplitude, self.angular_frequency, self.phase, self.offset
        )
    }

    fn to_vector(self) -> Vector4<Num> {
        Vector4::new(
            self.amplitude,
            self.angular_frequency,
            self.phase,
            self.offset,
        )
    }

    fn from_vector(v: &Vector4<Num>) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|p| p.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitOptions {
    pub max_iterations: u32,
    /// Converged once the relative decrease of the cost drops below this.
    pub tolerance: Num,
    pub initial_damping: Num,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-10,
            initial_damping: 1e-3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub params: SinusoidParams,
    pub iterations: u32,
    pub residual_sum_of_squares: Num,
    /// Root-mean-square residual, same unit as the fitted values
    pub rms_residual: Num,
}

impl FitReport {
    /// A converged fit is not necessarily a sensible one. This checks that the
    /// amplitude does not exceed the data range, the frequency is positive and
    /// the residuals are small compared to that range.
    pub fn is_plausible(&self, values: &[Num]) -> bool {
        let SinusoidParams {
            amplitude,
            angular_frequency,
            ..
        } = self.params;

        let (min, max) = values
            .iter()
            .fold((Num::INFINITY, Num::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });
        let range = max - min;

        range.is_finite()
            && angular_frequency > 0.0
            && amplitude.abs() <= range
            && self.rms_residual <= 0.25 * range
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (rms {:.3e} after {} iterations)",
            self.params.equation(),
            self.rms_residual,
            self.iterations
        )
    }
}

const MIN_SAMPLES: usize = 4;
const MAX_DAMPING: Num = 1e16;

/// Fits the sinusoid to `(times[i], values[i])` starting from `guess`.
pub fn fit_sinusoid(
    times: &[Num],
    values: &[Num],
    guess: SinusoidParams,
    options: &FitOptions,
) -> Result<FitReport> {
    if times.len() != values.len() || times.len() < MIN_SAMPLES {
        return Err(FitFailureKind::InsufficientData {
            required: MIN_SAMPLES,
            times: times.len(),
            values: values.len(),
        }
        .into());
    }

    if times.iter().chain(values).any(|v| !v.is_finite()) || !guess.is_finite() {
        return Err(FitFailureKind::NonFiniteData.into());
    }

    let mut params = guess.to_vector();
    let mut cost = cost_of(times, values, &params);
    let mut damping = options.initial_damping;

    for iteration in 1..=options.max_iterations {
        let (jtj, jtr) = normal_equations(times, values, &params);

        // Trial steps with increasing damping until the cost goes down
        let improved = loop {
            let mut lhs = jtj;
            for i in 0..4 {
                lhs[(i, i)] += damping * jtj[(i, i)].max(Num::EPSILON);
            }

            let Some(step) = lhs.lu().solve(&jtr) else {
                return Err(FitFailureKind::SingularSystem.into());
            };

            let candidate = params + step;
            let candidate_cost = cost_of(times, values, &candidate);

            if candidate_cost.is_finite() && candidate_cost <= cost {
                damping = (damping / 10.0).max(Num::EPSILON);
                break Some((candidate, candidate_cost));
            }

            damping *= 10.0;
            if damping > MAX_DAMPING {
                break None;
            }
        };

        let Some((candidate, candidate_cost)) = improved else {
            // No step decreases the cost any more, we're at a minimum
            return finish(params, cost, times.len(), iteration);
        };

        if !candidate.iter().all(|p| p.is_finite()) {
            return Err(FitFailureKind::NonFiniteParameters {
                iterations: iteration,
            }
            .into());
        }

        let decrease = cost - candidate_cost;
        let tolerance = options.tolerance;
        let step_is_negligible = candidate
            .iter()
            .zip(params.iter())
            .all(|(new, old)| (new - old).abs() <= tolerance * (old.abs() + tolerance));
        trace!(iteration, cost = candidate_cost, damping, "Fit step");

        params = candidate;
        cost = candidate_cost;

        if cost == 0.0
            || step_is_negligible
            || decrease <= options.tolerance * cost.max(Num::MIN_POSITIVE)
        {
            return finish(params, cost, times.len(), iteration);
        }
    }

    Err(FitFailureKind::NotConverged {
        iterations: options.max_iterations,
    }
    .into())
}

fn finish(params: Vector4<Num>, cost: Num, samples: usize, iterations: u32) -> Result<FitReport> {
    let params = SinusoidParams::from_vector(&params);
    let rms_residual = (cost / samples as Num).sqrt();

    debug!(
        iterations,
        rms_residual,
        equation = %params.equation(),
        "Sinusoid fit converged"
    );

    Ok(FitReport {
        params,
        iterations,
        residual_sum_of_squares: cost,
        rms_residual,
    })
}

fn cost_of(times: &[Num], values: &[Num], params: &Vector4<Num>) -> Num {
    let model = SinusoidParams::from_vector(params);

    times
        .iter()
        .zip(values)
        .map(|(&t, &y)| (y - model.evaluate(t)).powi(2))
        .sum()
}

/// Jᵀ·J and Jᵀ·r for residuals r = y - f(t)
fn normal_equations(
    times: &[Num],
    values: &[Num],
    params: &Vector4<Num>,
) -> (Matrix4<Num>, Vector4<Num>) {
    let model = SinusoidParams::from_vector(params);

    let mut jtj = Matrix4::zeros();
    let mut jtr = Vector4::zeros();

    for (&t, &y) in times.iter().zip(values) {
        let (sin, cos) = (model.angular_frequency * t + model.phase).sin_cos();

        // ∂f/∂A, ∂f/∂B, ∂f/∂C, ∂f/∂D
        let j = Vector4::new(
            sin,
            model.amplitude * t * cos,
            model.amplitude * cos,
            1.0,
        );
        let r = y - model.evaluate(t);

        jtj += j * j.transpose();
        jtr += j * r;
    }

    (jtj, jtr)
}
