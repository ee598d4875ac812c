use thiserror::Error;

use crate::Num;

pub type Result<T, E = OrbitError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Num,
        reason: &'static str,
    },

    #[error("Sinusoidal fit failed: {0}")]
    FitFailure(FitFailureKind),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitFailureKind {
    #[error("need at least {required} samples with matching lengths, got {times} times and {values} values")]
    InsufficientData {
        required: usize,
        times: usize,
        values: usize,
    },

    #[error("input contains non-finite samples")]
    NonFiniteData,

    #[error("normal equations are singular")]
    SingularSystem,

    #[error("parameters became non-finite after {iterations} iterations")]
    NonFiniteParameters { iterations: u32 },

    #[error("no convergence after {iterations} iterations")]
    NotConverged { iterations: u32 },
}

impl From<FitFailureKind> for OrbitError {
    fn from(kind: FitFailureKind) -> Self {
        OrbitError::FitFailure(kind)
    }
}

impl OrbitError {
    pub(crate) fn invalid(name: &'static str, value: Num, reason: &'static str) -> Self {
        OrbitError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub fn is_fit_failure(&self) -> bool {
        matches!(self, OrbitError::FitFailure(_))
    }
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: Num) -> Result<Num> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OrbitError::invalid(name, value, "must be finite"))
    }
}

/// Rejects non-finite, zero and negative values.
pub(crate) fn ensure_positive(name: &'static str, value: Num) -> Result<Num> {
    ensure_finite(name, value)?;

    if value > 0.0 {
        Ok(value)
    } else {
        Err(OrbitError::invalid(name, value, "must be positive"))
    }
}

/// Eccentricity of a closed orbit, 0 <= e < 1.
pub(crate) fn ensure_elliptic(name: &'static str, value: Num) -> Result<Num> {
    ensure_finite(name, value)?;

    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(OrbitError::invalid(name, value, "must lie in [0, 1)"))
    }
}
