use bevy::prelude::*;
use kepler_trajectory::{AnomalySolver, Num, OrbitParameters, PositionSample};

#[derive(Debug, Clone, Copy, Component)]
pub struct Star;

/// The orbiting body, positioned from its latest sample
#[derive(Default, Component)]
pub struct Planet {
    pub sample: PositionSample,
}

impl Planet {
    /// Solves for the planet position `time` seconds after periapsis passage.
    pub fn advance(
        &mut self,
        orbit: &OrbitParameters,
        solver: &AnomalySolver,
        time: Num,
    ) -> kepler_trajectory::Result<()> {
        let mean_anomaly = orbit.mean_anomaly(time)?;

        self.sample = PositionSample::new(time, solver.solve(mean_anomaly));

        Ok(())
    }
}
