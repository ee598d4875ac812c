//! Display units. Everything is computed in meters and seconds; these only
//! convert at the edges.

use crate::constants::{AU, SECONDS_PER_DAY, SECONDS_PER_YEAR};
use crate::Num;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Meter,
    Kilometer,
    /// 1e9 m
    Gigameter,
    AstronomicalUnit,
}

impl LengthUnit {
    pub const fn meters(self) -> Num {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Gigameter => 1e9,
            LengthUnit::AstronomicalUnit => AU,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Gigameter => "Gm",
            LengthUnit::AstronomicalUnit => "AU",
        }
    }

    pub fn from_meters(self, meters: Num) -> Num {
        meters / self.meters()
    }

    pub fn to_meters(self, value: Num) -> Num {
        value * self.meters()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Second,
    Day,
    Year,
}

impl TimeUnit {
    pub const fn seconds(self) -> Num {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Year => SECONDS_PER_YEAR,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Day => "day",
            TimeUnit::Year => "yr",
        }
    }

    pub fn from_seconds(self, seconds: Num) -> Num {
        seconds / self.seconds()
    }
}
