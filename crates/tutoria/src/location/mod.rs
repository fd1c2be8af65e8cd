//! Stored-location updates guarded by a great-circle distance gate.
//!
//! A user's coordinates are only overwritten silently when the reported fix
//! is close to the stored one; larger moves come back as a confirmation
//! request the client answers by resubmitting with the update flag set.

pub mod domain;
pub mod gate;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{LocationDecision, LocationError, LocationFix};
pub use gate::{DistanceGate, GatePolicy};
pub use router::location_router;
pub use service::{LocationService, LocationServiceError};
pub use store::{LocationStore, LocationStoreError};
