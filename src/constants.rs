use crate::Num;

/// Gravitational constant
pub const G: Num = 6.67430e-11;

/// Astronomical unit in meters
pub const AU: Num = 1.496e+11;

/// Mass of the Sun in kg
pub const SOLAR_MASS: Num = 1.989e30;

pub const SECONDS_PER_DAY: Num = 24.0 * 3600.0;

/// Julian year
pub const DAYS_PER_YEAR: Num = 365.25;

pub const SECONDS_PER_YEAR: Num = DAYS_PER_YEAR * SECONDS_PER_DAY;

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Fixed-point steps taken when solving Kepler's equation by default.
pub const DEFAULT_FIXED_POINT_ITERATIONS: u32 = 10;

#[cfg(feature = "f32")]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;
