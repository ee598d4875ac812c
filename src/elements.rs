use crate::astro::{self, elliptic};
use crate::error::{ensure_elliptic, ensure_finite, ensure_positive, Result};
use crate::Num;

/// Shape and timing of a closed two-body orbit in its own plane.
///
/// Lengths are in meters and times in seconds. Construction validates the
/// values, so every `OrbitParameters` describes an ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    semi_major_axis: Num,
    eccentricity: Num,
    period: Num,
}

impl OrbitParameters {
    pub fn new(semi_major_axis: Num, eccentricity: Num, period: Num) -> Result<Self> {
        Ok(Self {
            semi_major_axis: ensure_positive("semi_major_axis", semi_major_axis)?,
            eccentricity: ensure_elliptic("eccentricity", eccentricity)?,
            period: ensure_positive("period", period)?,
        })
    }

    /// Derives the period from the central body's mass with Kepler's third law.
    pub fn around_central_mass(semi_major_axis: Num, eccentricity: Num, mass: Num) -> Result<Self> {
        let semi_major_axis = ensure_positive("semi_major_axis", semi_major_axis)?;
        let mass = ensure_positive("central_mass", mass)?;

        Self::new(
            semi_major_axis,
            eccentricity,
            astro::period(semi_major_axis, mass),
        )
    }

    pub fn semi_major_axis(&self) -> Num {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    pub fn period(&self) -> Num {
        self.period
    }

    pub fn semi_minor_axis(&self) -> Num {
        elliptic::semi_minor_axis(self.semi_major_axis, self.eccentricity)
    }

    /// Distance between the center of the ellipse and the star.
    pub fn focus_offset(&self) -> Num {
        self.semi_major_axis * self.eccentricity
    }

    pub fn periapsis(&self) -> Num {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> Num {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    pub fn mean_motion(&self) -> Num {
        elliptic::mean_motion(self.period)
    }

    /// Mean anomaly at `time` seconds after periapsis passage.
    pub fn mean_anomaly(&self, time: Num) -> Result<Num> {
        let time = ensure_finite("time", time)?;

        Ok(elliptic::mean_anomaly(self.period, time))
    }
}
