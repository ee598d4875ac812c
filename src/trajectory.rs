use tracing::debug;

use crate::error::{OrbitError, Result};
use crate::math::linspace;
use crate::units::{LengthUnit, TimeUnit};
use crate::{AnomalySolver, Num, OrbitParameters, PositionSample, SolveStrategy};

/// One full period of an orbit, sampled at evenly spaced times from 0 to `T`
/// (both ends included).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    orbit: OrbitParameters,
    strategy: SolveStrategy,
    samples: Vec<PositionSample>,
}

impl Trajectory {
    pub fn sample(orbit: OrbitParameters, strategy: SolveStrategy, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(OrbitError::invalid(
                "sample_count",
                count as Num,
                "need at least two samples",
            ));
        }

        let solver = AnomalySolver::new(&orbit, strategy);

        let samples = linspace(0.0, orbit.period(), count)
            .into_iter()
            .map(|t| {
                let M = orbit.mean_anomaly(t)?;
                Ok(PositionSample::new(t, solver.solve(M)))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count, ?strategy, "Sampled trajectory");

        Ok(Self {
            orbit,
            strategy,
            samples,
        })
    }

    pub fn orbit(&self) -> &OrbitParameters {
        &self.orbit
    }

    pub fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self, unit: TimeUnit) -> Vec<Num> {
        self.samples
            .iter()
            .map(|s| unit.from_seconds(s.time))
            .collect()
    }

    pub fn distances(&self, unit: LengthUnit) -> Vec<Num> {
        self.samples
            .iter()
            .map(|s| unit.from_meters(s.radius))
            .collect()
    }

    pub fn mean_anomalies(&self) -> Vec<Num> {
        self.samples
            .iter()
            .map(|s| s.anomalies.mean_anomaly)
            .collect()
    }

    pub fn positions(&self, unit: LengthUnit) -> Vec<[Num; 2]> {
        let factor = 1.0 / unit.meters();

        self.samples
            .iter()
            .map(|s| s.scaled(factor).to_array())
            .collect()
    }

    /// Every `step`-th sample, for drawing lines from the star.
    pub fn spokes(&self, step: usize) -> impl Iterator<Item = &PositionSample> {
        self.samples.iter().step_by(step.max(1))
    }

    /// Closest sample to the star
    pub fn periapsis(&self) -> Option<&PositionSample> {
        self.samples
            .iter()
            .min_by(|a, b| a.radius.total_cmp(&b.radius))
    }

    /// Farthest sample from the star
    pub fn apoapsis(&self) -> Option<&PositionSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.radius.total_cmp(&b.radius))
    }

    /// Sample closest in time to `time`, wrapping around the period.
    pub fn sample_at(&self, time: Num) -> Option<&PositionSample> {
        let period = self.orbit.period();
        let t = time.rem_euclid(period);
        let index = (t / period * (self.samples.len() - 1) as Num).round() as usize;

        self.samples.get(index)
    }
}
