//! Pass-through handlers for the OpenWeatherMap provider endpoints.
//!
//! These reshape nothing beyond parameter validation: the registry is not
//! involved, and the One Call payload goes to the client verbatim.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use skycast_weather::Location;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoordinateParams {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl CoordinateParams {
    fn require(self) -> Result<(f64, f64), ApiError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(ApiError::BadRequest(
                "Latitude and longitude are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    q: Option<String>,
}

/// GET /api/weather/onecall: current + hourly + daily conditions.
pub async fn onecall(
    State(state): State<AppState>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (lat, lon) = params.require()?;
    let payload = state.weather.fetch_conditions(lat, lon).await?;
    Ok(Json(payload))
}

/// GET /api/weather/geocode: search locations by text.
pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter is required".to_string()))?;
    let candidates = state.weather.geocode(&query).await?;
    Ok(Json(candidates))
}

/// GET /api/weather/reverse-geocode: place name for coordinates.
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let (lat, lon) = params.require()?;
    let places = state.weather.reverse_geocode(lat, lon).await?;
    Ok(Json(places))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::testutil::{offline_state, state_against};
    use crate::api::router;

    async fn get(state: crate::state::AppState, uri: &str) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn onecall_passes_provider_payload_through() {
        let server = MockServer::start().await;
        let payload = json!({
            "lat": 48.8566,
            "lon": 2.3522,
            "current": { "temp": 291.65 },
            "hourly": [],
            "daily": [],
            "vendor_extra": true
        });
        Mock::given(method("GET"))
            .and(path("/data/3.0/onecall"))
            .and(query_param("lat", "48.8566"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let (status, body) =
            get(state_against(&server), "/api/weather/onecall?lat=48.8566&lon=2.3522").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn onecall_requires_both_coordinates() {
        let (status, body) = get(offline_state(), "/api/weather/onecall?lat=48.8566").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Latitude and longitude are required");
    }

    #[tokio::test]
    async fn onecall_without_api_key_is_internal_error() {
        let (status, body) =
            get(offline_state(), "/api/weather/onecall?lat=48.8566&lon=2.3522").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Weather API key is not configured");
    }

    #[tokio::test]
    async fn geocode_returns_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "Paris", "lat": 48.8566, "lon": 2.3522, "country": "FR" }
            ])))
            .mount(&server)
            .await;

        let (status, body) = get(state_against(&server), "/api/weather/geocode?q=Paris").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Paris");
    }

    #[tokio::test]
    async fn geocode_requires_query() {
        let (status, body) = get(offline_state(), "/api/weather/geocode").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Query parameter is required");
    }

    #[tokio::test]
    async fn reverse_geocode_returns_place() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "Seattle", "lat": 47.6062, "lon": -122.3321, "country": "US" }
            ])))
            .mount(&server)
            .await;

        let (status, body) = get(
            state_against(&server),
            "/api/weather/reverse-geocode?lat=47.6062&lon=-122.3321",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Seattle");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/3.0/onecall"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let (status, body) =
            get(state_against(&server), "/api/weather/onecall?lat=1&lon=2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().contains("502"));
    }
}
