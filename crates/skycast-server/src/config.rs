use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (`SKYCAST_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// OpenWeatherMap credential (`OPENWEATHER_API_KEY`).
    ///
    /// Optional: without it the provider pass-through endpoints fail with
    /// 500 while location CRUD keeps working, snapshots skipped.
    pub openweather_api_key: Option<String>,

    /// Outbound provider timeout in seconds (`SKYCAST_REQUEST_TIMEOUT_SECS`).
    pub request_timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("SKYCAST_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid SKYCAST_BIND_ADDR: {bind_addr}"))?;

        let openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let request_timeout_secs = match std::env::var("SKYCAST_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid SKYCAST_REQUEST_TIMEOUT_SECS: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            openweather_api_key,
            request_timeout_secs,
        })
    }

    /// Read and validate configuration.
    ///
    /// Returns the config along with any validation warnings; fails when
    /// validation produces errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::from_env()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.openweather_api_key.is_none() {
            result.add_warning(
                "openweather_api_key",
                "OPENWEATHER_API_KEY not set - weather fetching is disabled, \
                 location management stays available",
            );
        }

        if self.request_timeout_secs == 0 {
            result.add_error(
                "request_timeout_secs",
                "Provider timeout must be greater than 0",
            );
        } else if self.request_timeout_secs > 60 {
            result.add_warning(
                "request_timeout_secs",
                "Provider timeout is unusually long (>60s)",
            );
        }

        result
    }
}
