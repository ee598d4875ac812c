#![allow(non_snake_case)]
//! Sampling of a two-body orbit over one period, Kepler's equation solving
//! and a sinusoidal least-squares fit of the star-planet distance.
//!
//! ```
//! use kepler_trajectory::{AnomalySolver, OrbitParameters, SolveStrategy};
//! use kepler_trajectory::constants::{AU, SECONDS_PER_YEAR};
//!
//! let orbit = OrbitParameters::new(AU, 0.0167, SECONDS_PER_YEAR).unwrap();
//! let solver = AnomalySolver::new(&orbit, SolveStrategy::default());
//!
//! let perihelion = solver.solve(0.0);
//! assert!((perihelion.radius / orbit.periapsis() - 1.0).abs() < 1e-6);
//! ```

pub mod astro;
pub mod config;
pub mod constants;
mod elements;
pub mod error;
pub mod fit;
pub mod locale;
pub mod math;
mod pipeline;
mod position;
pub mod solver;
mod trajectory;
pub mod units;

pub use config::SimulationConfig;
pub use elements::OrbitParameters;
pub use error::{FitFailureKind, OrbitError, Result};
pub use fit::{fit_sinusoid, FitOptions, FitReport, SinusoidParams};
pub use locale::{Labels, Locale};
pub use pipeline::{Simulation, SimulationReport};
pub use position::PositionSample;
pub use solver::{AnomalySolution, AnomalySolver, AnomalyState, SolveStrategy};
pub use trajectory::Trajectory;
pub use units::{LengthUnit, TimeUnit};

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!("features `f32` and `f64` are mutually exclusive");

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("one of the features `f32` or `f64` must be enabled");

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(feature = "f32")]
pub use glam::{vec2, Vec2};

#[cfg(feature = "f64")]
pub type Num = f64;
#[cfg(feature = "f64")]
pub use glam::{dvec2 as vec2, DVec2 as Vec2};

pub use constants::{G, PI, TWO_PI};
