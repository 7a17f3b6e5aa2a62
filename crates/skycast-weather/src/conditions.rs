//! Condition-code mapping shared by all presentation front-ends.
//!
//! OpenWeatherMap condition ids are grouped by their hundreds digit, with a
//! handful of atmosphere codes (dust/sand/ash, tornado) special-cased.
//! See: https://openweathermap.org/weather-conditions

use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from OpenWeatherMap condition codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Dust,
    Tornado,
    Fog,
    #[default]
    Clear,
    PartlyCloudy,
    Clouds,
}

impl ConditionCategory {
    /// Convert an OpenWeatherMap condition code to a category.
    pub fn from_code(id: i64) -> Self {
        match id {
            200..=299 => Self::Thunderstorm,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            731 | 751 | 761 => Self::Dust,
            781 => Self::Tornado,
            700..=799 => Self::Fog,
            800 => Self::Clear,
            801 => Self::PartlyCloudy,
            802..=899 => Self::Clouds,
            _ => Self::Clear, // Unknown codes default to clear
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Dust => "Dust",
            Self::Tornado => "Tornado",
            Self::Fog => "Fog",
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Clouds => "Clouds",
        }
    }

    /// Icon name for the category (Material icon set, day/night aware).
    pub fn icon_name(&self, is_day: bool) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Drizzle => "grain",
            Self::Rain => "water_drop",
            Self::Snow => "ac_unit",
            Self::Dust | Self::Fog => "foggy",
            Self::Tornado => "cyclone",
            Self::Clear => {
                if is_day {
                    "wb_sunny"
                } else {
                    "nights_stay"
                }
            }
            Self::PartlyCloudy => {
                if is_day {
                    "partly_cloudy_day"
                } else {
                    "nights_stay"
                }
            }
            Self::Clouds => "wb_cloudy",
        }
    }

    /// Backdrop name for full-screen weather scenes.
    pub fn backdrop(&self, is_day: bool) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Drizzle | Self::Rain => "rainy",
            Self::Snow => "snow",
            Self::Dust => "dust",
            Self::Tornado | Self::Fog => "fog",
            Self::Clear => {
                if is_day {
                    "clear-day"
                } else {
                    "night"
                }
            }
            Self::PartlyCloudy | Self::Clouds => "cloudy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorm_range() {
        assert_eq!(ConditionCategory::from_code(200), ConditionCategory::Thunderstorm);
        assert_eq!(ConditionCategory::from_code(232), ConditionCategory::Thunderstorm);
    }

    #[test]
    fn drizzle_range() {
        assert_eq!(ConditionCategory::from_code(300), ConditionCategory::Drizzle);
        assert_eq!(ConditionCategory::from_code(321), ConditionCategory::Drizzle);
    }

    #[test]
    fn rain_range() {
        assert_eq!(ConditionCategory::from_code(500), ConditionCategory::Rain);
        assert_eq!(ConditionCategory::from_code(531), ConditionCategory::Rain);
    }

    #[test]
    fn snow_range() {
        assert_eq!(ConditionCategory::from_code(600), ConditionCategory::Snow);
        assert_eq!(ConditionCategory::from_code(622), ConditionCategory::Snow);
    }

    #[test]
    fn atmosphere_special_cases() {
        assert_eq!(ConditionCategory::from_code(731), ConditionCategory::Dust);
        assert_eq!(ConditionCategory::from_code(751), ConditionCategory::Dust);
        assert_eq!(ConditionCategory::from_code(761), ConditionCategory::Dust);
        assert_eq!(ConditionCategory::from_code(781), ConditionCategory::Tornado);
        assert_eq!(ConditionCategory::from_code(741), ConditionCategory::Fog);
        assert_eq!(ConditionCategory::from_code(701), ConditionCategory::Fog);
    }

    #[test]
    fn clear_and_cloud_codes() {
        assert_eq!(ConditionCategory::from_code(800), ConditionCategory::Clear);
        assert_eq!(ConditionCategory::from_code(801), ConditionCategory::PartlyCloudy);
        assert_eq!(ConditionCategory::from_code(802), ConditionCategory::Clouds);
        assert_eq!(ConditionCategory::from_code(804), ConditionCategory::Clouds);
    }

    #[test]
    fn unknown_codes_default_to_clear() {
        assert_eq!(ConditionCategory::from_code(0), ConditionCategory::Clear);
        assert_eq!(ConditionCategory::from_code(999), ConditionCategory::Clear);
    }

    #[test]
    fn clear_icon_follows_daylight() {
        assert_eq!(ConditionCategory::Clear.icon_name(true), "wb_sunny");
        assert_eq!(ConditionCategory::Clear.icon_name(false), "nights_stay");
        assert_eq!(ConditionCategory::PartlyCloudy.icon_name(false), "nights_stay");
    }

    #[test]
    fn rain_icon_is_day_independent() {
        assert_eq!(ConditionCategory::Rain.icon_name(true), "water_drop");
        assert_eq!(ConditionCategory::Rain.icon_name(false), "water_drop");
    }

    #[test]
    fn backdrop_names() {
        assert_eq!(ConditionCategory::Rain.backdrop(true), "rainy");
        assert_eq!(ConditionCategory::Dust.backdrop(true), "dust");
        assert_eq!(ConditionCategory::Clear.backdrop(true), "clear-day");
        assert_eq!(ConditionCategory::Clear.backdrop(false), "night");
    }
}
