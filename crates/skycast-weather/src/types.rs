use serde::{Deserialize, Serialize};

/// A place as returned by geocoding or chosen by the user.
///
/// Wire names match the OpenWeatherMap geocoding payload (`lat`/`lon`),
/// which is also the shape clients POST when saving a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Location {
    /// Whether two locations refer to the same place.
    ///
    /// Identity is the exact coordinate pair, never the name: provider
    /// coordinates are stable per place, so no epsilon is applied.
    pub fn same_coordinates(&self, other: &Location) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

/// Compact current-conditions summary attached to a saved location for
/// list-view display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSnapshot {
    /// Whole degrees Celsius.
    pub temp: i32,
    /// OpenWeatherMap condition code (see [`crate::conditions`]).
    pub weather_id: i64,
    /// Short condition group, e.g. "Clouds".
    pub description: String,
}

/// A user-pinned location held by the registry.
///
/// The `id` is opaque, assigned once at insertion and never derived from
/// coordinates or name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentSnapshot>,
}
