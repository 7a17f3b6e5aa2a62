//! Saved-location management handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use skycast_weather::{Location, SavedLocation};

use crate::error::ApiError;
use crate::state::AppState;

/// POST body for saving a location.
///
/// Fields are checked explicitly so every missing-field case yields the
/// same 400 message.
#[derive(Debug, Deserialize)]
pub struct AddLocationPayload {
    name: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    country: Option<String>,
    state: Option<String>,
}

impl AddLocationPayload {
    fn into_candidate(self) -> Result<Location, ApiError> {
        let missing = || {
            ApiError::BadRequest("Name, coordinates, and country are required".to_string())
        };

        let name = self.name.filter(|n| !n.is_empty()).ok_or_else(missing)?;
        let country = self.country.filter(|c| !c.is_empty()).ok_or_else(missing)?;
        let lat = self.lat.ok_or_else(missing)?;
        let lon = self.lon.ok_or_else(missing)?;

        Ok(Location {
            name,
            lat,
            lon,
            country,
            state: self.state,
        })
    }
}

/// GET /api/weather/locations: list saved locations, lazily refreshing
/// any entry that is missing its conditions snapshot.
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<SavedLocation>> {
    Json(state.registry.list().await)
}

/// POST /api/weather/locations: save a location.
pub async fn add_location(
    State(state): State<AppState>,
    Json(payload): Json<AddLocationPayload>,
) -> Result<(StatusCode, Json<SavedLocation>), ApiError> {
    let candidate = payload.into_candidate()?;
    let saved = state.registry.add(candidate).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/weather/locations/{id}: remove a saved location.
pub async fn remove_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.registry.remove(&id)?;
    Ok(Json(json!({ "message": "Location removed successfully" })))
}
