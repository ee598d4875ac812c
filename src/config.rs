use crate::constants::{AU, DEFAULT_SAMPLE_COUNT, SECONDS_PER_YEAR};
use crate::error::Result;
use crate::{FitOptions, Locale, Num, OrbitParameters, SolveStrategy};

/// Everything one run of [`Simulation`](crate::Simulation) needs.
///
/// Lengths in meters, times in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub semi_major_axis: Num,
    pub eccentricity: Num,
    pub period: Num,
    pub sample_count: usize,
    pub strategy: SolveStrategy,
    /// `None` skips the sinusoidal fit
    pub fit: Option<FitOptions>,
    pub locale: Locale,
}

impl Default for SimulationConfig {
    /// Earth around the Sun with true Keplerian motion
    fn default() -> Self {
        Self {
            semi_major_axis: AU,
            eccentricity: 0.0167,
            period: SECONDS_PER_YEAR,
            sample_count: DEFAULT_SAMPLE_COUNT,
            strategy: SolveStrategy::default(),
            fit: Some(FitOptions::default()),
            locale: Locale::default(),
        }
    }
}

impl SimulationConfig {
    /// Uniform-angle ellipse: the parametric angle grows linearly with time,
    /// Kepler's equation is not solved.
    pub fn approximate() -> Self {
        Self {
            strategy: SolveStrategy::UniformAngle,
            ..Default::default()
        }
    }

    /// Keplerian motion on a much more elliptical orbit than Earth's.
    pub fn elongated() -> Self {
        Self {
            eccentricity: 0.5,
            ..Default::default()
        }
    }

    pub fn with_strategy(self, strategy: SolveStrategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn without_fit(self) -> Self {
        Self { fit: None, ..self }
    }

    /// Validates the orbital part of the configuration.
    pub fn orbit(&self) -> Result<OrbitParameters> {
        OrbitParameters::new(self.semi_major_axis, self.eccentricity, self.period)
    }
}
