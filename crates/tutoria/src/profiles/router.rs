use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AcademicProfile, TutorProfileSubmission};
use super::repository::{ProfileRepository, UserDirectory};
use super::service::{ProfileService, ProfileServiceError};
use crate::scheduling::domain::TutorId;
use crate::scheduling::repository::AvailabilityRepository;
use crate::users::UserId;

/// Router builder exposing tutor profile creation and lookup.
pub fn profile_router<P, D, R>(service: Arc<ProfileService<P, D, R>>) -> Router
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    Router::new()
        .route("/api/v1/tutors", post(create_handler::<P, D, R>))
        .route("/api/v1/tutors/:tutor_id", get(get_handler::<P, D, R>))
        .route(
            "/api/v1/users/:user_id/academic",
            get(list_academic_handler::<P, D, R>).post(record_academic_handler::<P, D, R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<P, D, R>(
    State(service): State<Arc<ProfileService<P, D, R>>>,
    axum::Json(submission): axum::Json<TutorProfileSubmission>,
) -> Response
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    match service.create_tutor(submission) {
        Ok(profile) => (StatusCode::CREATED, axum::Json(profile)).into_response(),
        Err(ProfileServiceError::ProfileExists) => {
            let payload = json!({ "error": "Teacher profile already exists." });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn get_handler<P, D, R>(
    State(service): State<Arc<ProfileService<P, D, R>>>,
    Path(tutor_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    match service.get(&TutorId(tutor_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(ProfileServiceError::NotFound) => {
            let payload = json!({ "error": "tutor profile not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

/// Academic entry body; the owning user comes from the path.
#[derive(Debug, Deserialize)]
pub(crate) struct AcademicEntryRequest {
    #[serde(default)]
    pub(crate) institution: String,
    #[serde(default)]
    pub(crate) degree: String,
    #[serde(default)]
    pub(crate) graduation_year: Option<u16>,
    #[serde(default)]
    pub(crate) results: String,
    #[serde(default)]
    pub(crate) certificate_key: Option<String>,
}

pub(crate) async fn record_academic_handler<P, D, R>(
    State(service): State<Arc<ProfileService<P, D, R>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<AcademicEntryRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    let entry = AcademicProfile {
        user_id: UserId(user_id),
        institution: request.institution,
        degree: request.degree,
        graduation_year: request.graduation_year,
        results: request.results,
        certificate_key: request.certificate_key,
    };

    match service.record_academic(entry) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn list_academic_handler<P, D, R>(
    State(service): State<Arc<ProfileService<P, D, R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    match service.academic_for(&UserId(user_id)) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: ProfileServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
