//! Chart and console wording in the supported languages.

use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Korean];

    pub fn name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Korean => "한국어",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Korean => &KOREAN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Locale::English),
            "ko" | "kor" | "korean" => Ok(Locale::Korean),
            other => Err(format!("unknown locale `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub planet: &'static str,
    pub star: &'static str,

    pub orbit_title: &'static str,
    pub x_position_au: &'static str,
    pub y_position_au: &'static str,

    pub distance_time_title: &'static str,
    pub time_days: &'static str,
    pub distance_gm: &'static str,
    pub distance_actual: &'static str,

    pub distance_angle_title: &'static str,
    pub angle_rad: &'static str,
    pub distance_km: &'static str,

    pub fit_title: &'static str,
    pub distance_fitted: &'static str,

    pub fitted_parameters: &'static str,
    pub sinusoidal_equation: &'static str,
}

pub static ENGLISH: Labels = Labels {
    planet: "Earth's Orbit",
    star: "Sun",

    orbit_title: "2D Orbit of Earth around the Sun",
    x_position_au: "X position (AU)",
    y_position_au: "Y position (AU)",

    distance_time_title: "Distance between Earth and Sun over Time",
    time_days: "Time (days)",
    distance_gm: "Distance (Gm)",
    distance_actual: "Distance (Actual)",

    distance_angle_title: "Distance between the Sun and the Earth with respect to the angle",
    angle_rad: "Angle (rad)",
    distance_km: "Distance between Sun and Earth (km)",

    fit_title: "Distance between Earth and Sun with Sinusoidal Fit",
    distance_fitted: "Distance (Fitted)",

    fitted_parameters: "Fitted parameters",
    sinusoidal_equation: "Sinusoidal equation",
};

pub static KOREAN: Labels = Labels {
    planet: "지구의 궤도",
    star: "태양",

    orbit_title: "태양 주위를 도는 지구의 2D 궤도",
    x_position_au: "X 위치 (천문단위)",
    y_position_au: "Y 위치 (천문단위)",

    distance_time_title: "시간에 따른 지구와 태양 사이의 거리",
    time_days: "시간 (일)",
    distance_gm: "거리 (Gm)",
    distance_actual: "거리 (실제)",

    distance_angle_title: "각도에 따른 태양과 지구 사이의 거리 변화",
    angle_rad: "각도 (라디안)",
    distance_km: "태양과 지구 사이의 거리 (km)",

    fit_title: "사인 함수 피팅을 통한 지구와 태양 사이의 거리",
    distance_fitted: "거리 (피팅)",

    fitted_parameters: "피팅된 매개변수",
    sinusoidal_equation: "사인 함수 방정식",
};
