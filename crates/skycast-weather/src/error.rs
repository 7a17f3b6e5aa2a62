use thiserror::Error;

/// Errors from the OpenWeatherMap façade.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API key is not configured")]
    MissingApiKey,

    #[error("OpenWeatherMap API error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors from the saved-location registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Location already exists")]
    Duplicate,

    #[error("Location not found")]
    NotFound,
}
