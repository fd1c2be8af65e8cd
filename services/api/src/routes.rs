use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tutoria::location::location_router;
use tutoria::location::store::LocationStore;
use tutoria::location::LocationService;
use tutoria::profiles::profile_router;
use tutoria::profiles::repository::{ProfileRepository, UserDirectory};
use tutoria::profiles::ProfileService;
use tutoria::scheduling::availability_router;
use tutoria::scheduling::repository::AvailabilityRepository;
use tutoria::scheduling::AvailabilityService;

pub(crate) fn with_marketplace_routes<R, S, P, D>(
    availability: Arc<AvailabilityService<R>>,
    location: Arc<LocationService<S>>,
    profiles: Arc<ProfileService<P, D, R>>,
) -> axum::Router
where
    R: AvailabilityRepository + 'static,
    S: LocationStore + 'static,
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
{
    availability_router(availability)
        .merge(location_router(location))
        .merge(profile_router(profiles))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
