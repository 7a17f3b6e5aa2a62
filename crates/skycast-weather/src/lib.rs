//! Weather domain for Skycast
//!
//! Provides the OpenWeatherMap client, the saved-location registry and the
//! pure display helpers (condition mapping, unit conversion, formatting)
//! shared by presentation front-ends.

pub mod conditions;
pub mod error;
pub mod format;
pub mod provider;
pub mod registry;
pub mod types;
pub mod units;

pub use conditions::ConditionCategory;
pub use error::{RegistryError, WeatherError};
pub use provider::OpenWeatherClient;
pub use registry::SavedLocationRegistry;
pub use types::{CurrentSnapshot, Location, SavedLocation};
pub use units::TemperatureUnit;
