use crate::astro::elliptic;
use crate::solver::{AnomalySolution, AnomalyState};
use crate::{vec2, Num, Vec2};

/// Where the planet is at one instant, star at the origin and periapsis
/// along +x.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Seconds since periapsis passage
    pub time: Num,
    pub anomalies: AnomalyState,
    /// Meters, in the orbital plane
    pub position: Vec2,
    /// Meters from the star
    pub radius: Num,
}

impl PositionSample {
    pub fn new(time: Num, solution: AnomalySolution) -> Self {
        let (sin_v, cos_v) = solution.anomalies.true_anomaly.sin_cos();

        Self {
            time,
            anomalies: solution.anomalies,
            position: vec2(solution.radius * cos_v, solution.radius * sin_v),
            radius: solution.radius,
        }
    }

    pub fn from_true_anomaly(time: Num, a: Num, e: Num, v: Num) -> Self {
        let position = elliptic::position_at_true_anomaly(a, e, v);

        Self {
            time,
            anomalies: AnomalyState {
                true_anomaly: v,
                ..Default::default()
            },
            position,
            radius: position.length(),
        }
    }

    /// Position scaled by `factor`, e.g. `1.0 / AU`.
    pub fn scaled(&self, factor: Num) -> Vec2 {
        self.position * factor
    }
}

#[cfg(all(test, feature = "f64"))]
mod tests {
    use super::*;
    use crate::PI;

    #[test]
    fn projection_matches_radius() {
        let sample = PositionSample::from_true_anomaly(0.0, 2.0, 0.25, PI / 3.0);
        let expected = elliptic::radius(2.0, 0.25, PI / 3.0);

        assert!((sample.radius - expected).abs() < 1e-9);
        assert!((sample.position.y / sample.position.x - (PI / 3.0).tan()).abs() < 1e-9);
    }

    #[test]
    fn solution_projection_at_apoapsis() {
        let solution = AnomalySolution {
            anomalies: AnomalyState {
                mean_anomaly: PI,
                eccentric_anomaly: PI,
                true_anomaly: PI,
            },
            radius: 3.0,
        };

        let sample = PositionSample::new(10.0, solution);

        assert!((sample.position.x + 3.0).abs() < 1e-9);
        assert!(sample.position.y.abs() < 1e-9);
        assert_eq!(sample.time, 10.0);
    }
}
