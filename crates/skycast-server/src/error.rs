use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use skycast_weather::{RegistryError, WeatherError};

/// Request-terminal API error; serialized as `{"message": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        // Provider messages arrive pre-truncated; everything upstream is
        // a 500 to the client.
        ApiError::Internal(err.to_string())
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Duplicate => ApiError::Conflict("Location already exists".to_string()),
            RegistryError::NotFound => ApiError::NotFound("Location not found".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn registry_errors_map_to_conflict_and_not_found() {
        assert!(matches!(
            ApiError::from(RegistryError::Duplicate),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(RegistryError::NotFound),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn weather_errors_map_to_internal() {
        let err = ApiError::from(WeatherError::MissingApiKey);
        match err {
            ApiError::Internal(message) => {
                assert_eq!(message, "Weather API key is not configured");
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn responses_carry_json_message_body() {
        let response = ApiError::BadRequest("Query parameter is required".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
