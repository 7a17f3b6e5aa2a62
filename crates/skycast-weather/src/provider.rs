//! OpenWeatherMap client: conditions, geocoding and reverse geocoding.
//!
//! Thin request/response façade with no retry or backoff; every failure
//! surfaces immediately as a [`WeatherError`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::types::{CurrentSnapshot, Location};
use crate::units::kelvin_to_celsius;

const BASE_URL: &str = "https://api.openweathermap.org";
const GEOCODE_LIMIT: &str = "5";
const REVERSE_GEOCODE_LIMIT: &str = "1";

/// Upstream error bodies are truncated to this length before they can
/// reach a client.
const MAX_UPSTREAM_MESSAGE: usize = 200;

/// Client for the OpenWeatherMap weather and geocoding APIs.
///
/// The API key is optional: an unconfigured client reports
/// [`WeatherError::MissingApiKey`] from every call without issuing a
/// request, letting callers degrade gracefully.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    http: Arc<Client>,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a client against the production OpenWeatherMap endpoints.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, BASE_URL, timeout)
    }

    /// Create a client against an alternate base URL (tests).
    pub fn with_base_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            http: Arc::new(http),
            api_key,
        })
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    fn key(&self) -> Result<&str, WeatherError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey)
    }

    /// Fetch the full current + hourly + daily payload for coordinates.
    ///
    /// The provider payload is passed through verbatim (minus the
    /// `minutely` block, which no consumer displays).
    pub async fn fetch_conditions(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<serde_json::Value, WeatherError> {
        let key = self.key()?;
        tracing::debug!("Fetching conditions for {}, {}", lat, lon);

        let url = format!("{}/data/3.0/onecall", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string().as_str()),
                ("lon", lon.to_string().as_str()),
                ("appid", key),
                ("exclude", "minutely"),
            ])
            .send()
            .await?;

        self.read_json(response).await
    }

    /// Fetch a compact current-conditions snapshot for coordinates.
    pub async fn current_conditions(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentSnapshot, WeatherError> {
        let key = self.key()?;
        tracing::debug!("Fetching current snapshot for {}, {}", lat, lon);

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string().as_str()),
                ("lon", lon.to_string().as_str()),
                ("appid", key),
            ])
            .send()
            .await?;

        let parsed: CurrentConditionsResponse = self.read_json(response).await?;

        let (weather_id, description) = parsed
            .weather
            .into_iter()
            .next()
            .map(|tag| (tag.id, tag.main))
            .unwrap_or((0, "Unknown".to_string()));

        Ok(CurrentSnapshot {
            temp: kelvin_to_celsius(parsed.main.temp),
            weather_id,
            description,
        })
    }

    /// Search locations by free text; returns provider-ranked candidates.
    pub async fn geocode(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        let key = self.key()?;
        tracing::debug!("Geocoding query: {}", query);

        let url = format!("{}/geo/1.0/direct", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", GEOCODE_LIMIT), ("appid", key)])
            .send()
            .await?;

        self.read_json(response).await
    }

    /// Resolve coordinates to a place name.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Vec<Location>, WeatherError> {
        let key = self.key()?;
        tracing::debug!("Reverse geocoding {}, {}", lat, lon);

        let url = format!("{}/geo/1.0/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string().as_str()),
                ("lon", lon.to_string().as_str()),
                ("limit", REVERSE_GEOCODE_LIMIT),
                ("appid", key),
            ])
            .send()
            .await?;

        self.read_json(response).await
    }

    /// Check response status and parse the body.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Provider {
                status: status.as_u16(),
                message: truncate_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::InvalidResponse(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentConditionsResponse {
    main: MainReadings,
    #[serde(default)]
    weather: Vec<ConditionTag>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionTag {
    id: i64,
    main: String,
}

fn truncate_message(body: &str) -> String {
    if body.len() <= MAX_UPSTREAM_MESSAGE {
        return body.to_string();
    }
    let mut cut = MAX_UPSTREAM_MESSAGE;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
