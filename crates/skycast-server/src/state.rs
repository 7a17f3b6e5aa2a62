use std::sync::Arc;

use skycast_weather::{OpenWeatherClient, SavedLocationRegistry};

/// Shared state injected into every request handler.
///
/// The registry is the only mutable piece; handlers never touch its
/// internals directly.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SavedLocationRegistry>,
    pub weather: OpenWeatherClient,
}

impl AppState {
    pub fn new(weather: OpenWeatherClient) -> Self {
        Self {
            registry: Arc::new(SavedLocationRegistry::new(weather.clone())),
            weather,
        }
    }
}
