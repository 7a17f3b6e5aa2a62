//! Saved-location registry: the user's pinned places.
//!
//! Holds an insertion-ordered list of saved locations, enforces
//! coordinate-uniqueness and attaches a compact current-conditions
//! snapshot to each entry on a best-effort basis.

use futures_util::future::join_all;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::error::RegistryError;
use crate::provider::OpenWeatherClient;
use crate::types::{Location, SavedLocation};

/// In-memory registry of saved locations.
///
/// Constructed at process start and shared behind an `Arc`; the lock is
/// only ever held for synchronous list work, never across an await.
pub struct SavedLocationRegistry {
    weather: OpenWeatherClient,
    entries: Mutex<Vec<SavedLocation>>,
}

impl SavedLocationRegistry {
    pub fn new(weather: OpenWeatherClient) -> Self {
        Self {
            weather,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Return every saved location in insertion order, repairing missing
    /// snapshots on the way out.
    ///
    /// Reading deliberately triggers a refresh for entries without a
    /// snapshot (cache-fill-on-read). Refreshes run concurrently and each
    /// one is best-effort: a failure leaves that entry's snapshot absent
    /// and is retried on the next call. A snapshot, once present, is never
    /// re-fetched; only remove + re-add replaces it. With no API key
    /// configured the refresh step is skipped entirely.
    pub async fn list(&self) -> Vec<SavedLocation> {
        if self.weather.is_configured() {
            let stale: Vec<SavedLocation> = {
                let entries = self.entries.lock();
                entries.iter().filter(|e| e.current.is_none()).cloned().collect()
            };

            if !stale.is_empty() {
                let refreshes = stale.into_iter().map(|entry| {
                    let weather = self.weather.clone();
                    async move {
                        let result = weather
                            .current_conditions(entry.location.lat, entry.location.lon)
                            .await;
                        (entry, result)
                    }
                });

                let results = join_all(refreshes).await;

                let mut entries = self.entries.lock();
                for (entry, result) in results {
                    match result {
                        Ok(snapshot) => {
                            // The entry may have been removed while the
                            // fetch was in flight.
                            if let Some(live) = entries.iter_mut().find(|e| e.id == entry.id) {
                                live.current = Some(snapshot);
                            }
                        }
                        Err(e) => {
                            tracing::warn!(
                                "Failed to refresh conditions for {}: {}",
                                entry.location.name,
                                e
                            );
                        }
                    }
                }
            }
        }

        self.entries.lock().clone()
    }

    /// Save a location, attaching a current-conditions snapshot when one
    /// can be fetched.
    ///
    /// Fails with [`RegistryError::Duplicate`] when an entry with the same
    /// exact coordinates already exists. A failed snapshot fetch (or a
    /// missing API key) still inserts the location, just without a
    /// snapshot.
    pub async fn add(&self, candidate: Location) -> Result<SavedLocation, RegistryError> {
        {
            let entries = self.entries.lock();
            if entries.iter().any(|e| e.location.same_coordinates(&candidate)) {
                return Err(RegistryError::Duplicate);
            }
        }

        let current = if self.weather.is_configured() {
            match self
                .weather
                .current_conditions(candidate.lat, candidate.lon)
                .await
            {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch conditions for new location {}: {}",
                        candidate.name,
                        e
                    );
                    None
                }
            }
        } else {
            None
        };

        let entry = SavedLocation {
            id: Uuid::new_v4().to_string(),
            location: candidate,
            current,
        };

        let mut entries = self.entries.lock();
        // The fetch ran outside the lock; a concurrent add for the same
        // coordinates may have won the race.
        if entries.iter().any(|e| e.location.same_coordinates(&entry.location)) {
            return Err(RegistryError::Duplicate);
        }
        entries.push(entry.clone());

        tracing::info!("Saved location {} ({})", entry.location.name, entry.id);
        Ok(entry)
    }

    /// Remove a saved location by id.
    ///
    /// Removing an unknown or already-removed id fails with
    /// [`RegistryError::NotFound`] so callers can tell "already gone" from
    /// "removed now".
    pub fn remove(&self, id: &str) -> Result<(), RegistryError> {
        let mut entries = self.entries.lock();
        let index = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(RegistryError::NotFound)?;
        entries.remove(index);

        tracing::info!("Removed location {}", id);
        Ok(())
    }
}
