use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::location::gate::DistanceGate;
use crate::location::router::location_router;
use crate::location::service::LocationService;
use crate::location::store::{LocationStore, LocationStoreError};
use crate::users::UserId;

/// Stored fix used across the gate tests (Dhaka).
pub(super) const DHAKA: &str = "23.4567,90.1234,10";
/// Roughly 90 meters north of [`DHAKA`].
pub(super) const NEAR_DHAKA: &str = "23.4575,90.1234,10";
/// Roughly 250 meters north of [`DHAKA`].
pub(super) const FAR_DHAKA: &str = "23.45895,90.1234,10";

/// A candidate `offset` degrees of latitude north of [`DHAKA`].
pub(super) fn north_of_dhaka(offset: f64) -> String {
    format!("{:.6},90.1234,10", 23.4567 + offset)
}

pub(super) fn student() -> UserId {
    UserId("student-7".to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryLocations {
    records: Arc<Mutex<HashMap<UserId, String>>>,
}

impl MemoryLocations {
    pub(super) fn with_stored(user: &UserId, location: &str) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .expect("location mutex poisoned")
            .insert(user.clone(), location.to_string());
        store
    }

    pub(super) fn stored(&self, user: &UserId) -> Option<String> {
        self.records
            .lock()
            .expect("location mutex poisoned")
            .get(user)
            .cloned()
    }
}

impl LocationStore for MemoryLocations {
    fn load(&self, user: &UserId) -> Result<Option<String>, LocationStoreError> {
        Ok(self.stored(user))
    }

    fn store(&self, user: &UserId, location: &str) -> Result<(), LocationStoreError> {
        self.records
            .lock()
            .expect("location mutex poisoned")
            .insert(user.clone(), location.to_string());
        Ok(())
    }
}

pub(super) struct UnavailableLocations;

impl LocationStore for UnavailableLocations {
    fn load(&self, _user: &UserId) -> Result<Option<String>, LocationStoreError> {
        Err(LocationStoreError::Unavailable(
            "database offline".to_string(),
        ))
    }

    fn store(&self, _user: &UserId, _location: &str) -> Result<(), LocationStoreError> {
        Err(LocationStoreError::Unavailable(
            "database offline".to_string(),
        ))
    }
}

pub(super) fn service_with(store: MemoryLocations) -> LocationService<MemoryLocations> {
    LocationService::new(DistanceGate::default(), Arc::new(store))
}

pub(super) fn router_with(store: MemoryLocations) -> axum::Router {
    location_router(Arc::new(service_with(store)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
