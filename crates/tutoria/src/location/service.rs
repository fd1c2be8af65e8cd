use std::sync::Arc;

use tracing::info;

use super::domain::{LocationDecision, LocationError};
use super::gate::DistanceGate;
use super::store::{LocationStore, LocationStoreError};
use crate::users::UserId;

/// Service wrapping the distance gate around a location store.
pub struct LocationService<S> {
    gate: DistanceGate,
    store: Arc<S>,
}

impl<S> LocationService<S>
where
    S: LocationStore + 'static,
{
    pub fn new(gate: DistanceGate, store: Arc<S>) -> Self {
        Self { gate, store }
    }

    /// Evaluate a reported location and persist it on the accepted path.
    ///
    /// An absent or blank candidate is a `MissingLocation` validation failure;
    /// only the `Accepted` outcome touches the store.
    pub fn submit(
        &self,
        user: &UserId,
        candidate: Option<&str>,
        force_update: bool,
    ) -> Result<LocationDecision, LocationServiceError> {
        let candidate = candidate
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(LocationError::MissingLocation)?;

        let previous = self.store.load(user)?;
        let decision = self
            .gate
            .evaluate(previous.as_deref(), candidate, force_update)?;

        if let LocationDecision::Accepted { stored } = &decision {
            self.store.store(user, stored)?;
            info!(user = %user.0, "stored location updated");
        }

        Ok(decision)
    }
}

/// Error raised by the location service.
#[derive(Debug, thiserror::Error)]
pub enum LocationServiceError {
    #[error(transparent)]
    Validation(#[from] LocationError),
    #[error(transparent)]
    Store(#[from] LocationStoreError),
}
