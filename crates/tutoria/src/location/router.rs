use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{LocationDecision, LocationError};
use super::service::{LocationService, LocationServiceError};
use super::store::LocationStore;
use crate::users::UserId;

/// Router builder exposing the location-update endpoint.
pub fn location_router<S>(service: Arc<LocationService<S>>) -> Router
where
    S: LocationStore + 'static,
{
    Router::new()
        .route("/api/v1/users/:user_id/location", post(submit_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationUpdateRequest {
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Set by the client after the user confirms a flagged move.
    #[serde(default)]
    pub(crate) update: bool,
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<LocationService<S>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<LocationUpdateRequest>,
) -> Response
where
    S: LocationStore + 'static,
{
    let user = UserId(user_id);
    match service.submit(&user, request.location.as_deref(), request.update) {
        Ok(LocationDecision::Accepted { .. }) => {
            let payload = json!({ "detail": "Location updated successfully." });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(LocationDecision::NeedsConfirmation { distance_km }) => {
            let payload = json!({
                "detail": "Location update available. The new location is far enough from the previous location to require confirmation.",
                "distance_km": distance_km,
                "update_required": true,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(LocationDecision::Unchanged) => {
            let payload = json!({
                "detail": "Location does not need to be updated.",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(LocationServiceError::Validation(LocationError::MissingLocation)) => {
            let payload = json!({ "error": "Location is required." });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(LocationServiceError::Validation(error @ LocationError::MalformedLocation { .. })) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
