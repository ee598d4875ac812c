use crate::constants::TWO_PI;
use crate::{vec2, Num, Vec2};

/// Mean motion of a closed orbit with the given period
/// https://en.wikipedia.org/wiki/Mean_motion
pub fn mean_motion(period: Num) -> Num {
    TWO_PI / period
}

/// https://en.wikipedia.org/wiki/Mean_anomaly
pub fn mean_anomaly(period: Num, time: Num) -> Num {
    mean_motion(period) * time
}

/// Kepler's equation for elliptic orbits, rearranged as a fixed-point map:
/// E = M + e * sin(E)
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-keplers-equation-ellipse
#[inline]
pub fn kepler_fixed_point(M: Num, e: Num, E: Num) -> Num {
    M + e * E.sin()
}

/// f(E) = E - e*sin(E) - M
#[inline]
pub fn kepler_residual(M: Num, e: Num, E: Num) -> Num {
    E - (e * E.sin()) - M
}

/// f'(E) = 1 - e*cos(E)
#[inline]
pub fn kepler_residual_derivative(e: Num, E: Num) -> Num {
    1.0 - (e * E.cos())
}

/// True anomaly from the eccentric anomaly.
///
/// Uses the half-angle form with `atan2` so the quadrant follows E over the
/// whole real line instead of folding at ±π like a plain `atan` would.
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-eccentric-anomaly-true-anomaly-ellipse
pub fn true_anomaly(E: Num, e: Num) -> Num {
    let (sin_half, cos_half) = (E / 2.0).sin_cos();

    2.0 * Num::atan2((1.0 + e).sqrt() * sin_half, (1.0 - e).sqrt() * cos_half)
}

/// Orbit equation, distance from the focus at true anomaly `v`
pub fn radius(a: Num, e: Num, v: Num) -> Num {
    a * (1.0 - e.powi(2)) / (1.0 + e * v.cos())
}

/// Perifocal position, periapsis along +x, star at the origin
pub fn position_at_true_anomaly(a: Num, e: Num, v: Num) -> Vec2 {
    let r = radius(a, e, v);
    let (sin_v, cos_v) = v.sin_cos();

    vec2(r * cos_v, r * sin_v)
}

pub fn semi_minor_axis(a: Num, e: Num) -> Num {
    a * (1.0 - e.powi(2)).sqrt()
}
