//! HTTP surface: provider pass-through plus saved-location management.

pub mod forecast;
pub mod locations;

use axum::routing::{delete, get};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather/onecall", get(forecast::onecall))
        .route("/api/weather/geocode", get(forecast::geocode))
        .route("/api/weather/reverse-geocode", get(forecast::reverse_geocode))
        .route(
            "/api/weather/locations",
            get(locations::list_locations).post(locations::add_location),
        )
        .route(
            "/api/weather/locations/{id}",
            delete(locations::remove_location),
        )
        .with_state(state)
}
