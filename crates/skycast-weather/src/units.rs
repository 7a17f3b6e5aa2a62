//! Temperature conversion shared by all presentation front-ends.
//!
//! OpenWeatherMap payloads carry Kelvin; clients display whole degrees in
//! the user's preferred unit.

use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix for display, e.g. "°C".
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Convert Kelvin to whole degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}

/// Convert Kelvin to whole degrees Fahrenheit.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> i32 {
    ((kelvin - 273.15) * 9.0 / 5.0 + 32.0).round() as i32
}

/// Convert Kelvin to the requested unit.
pub fn convert_temp(kelvin: f64, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
        TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
    }
}

/// Format an already-converted temperature for display, e.g. "18°C".
pub fn format_temp(temp: i32, unit: TemperatureUnit) -> String {
    format!("{}{}", temp, unit.suffix())
}
