use crate::constants::{G, TWO_PI};
use crate::Num;

pub mod elliptic;

/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(mass: Num) -> Num {
    G * mass
}

/// https://en.wikipedia.org/wiki/Orbital_period
pub fn period(a: Num, mass: Num) -> Num {
    TWO_PI * (a.powi(3) / standard_gravitational_parameter(mass)).sqrt()
}

#[cfg(all(test, feature = "f64"))]
mod tests {
    use super::*;
    use crate::constants::{AU, SECONDS_PER_YEAR, SOLAR_MASS};

    #[test]
    fn earth_period_is_about_a_year() {
        let t = period(AU, SOLAR_MASS);

        assert!((t / SECONDS_PER_YEAR - 1.0).abs() < 0.01, "t = {t}");
    }
}
