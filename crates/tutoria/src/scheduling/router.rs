use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveTime;
use serde::Deserialize;
use serde_json::json;

use super::domain::{AvailabilitySlot, DayOfWeek, TutorId};
use super::repository::{AvailabilityRepository, RepositoryError};
use super::service::{AvailabilityService, AvailabilityServiceError};

/// Router builder exposing availability search and slot management.
pub fn availability_router<R>(service: Arc<AvailabilityService<R>>) -> Router
where
    R: AvailabilityRepository + 'static,
{
    Router::new()
        .route("/api/v1/tutors/available", get(search_handler::<R>))
        .route(
            "/api/v1/tutors/:tutor_id/slots",
            get(list_slots_handler::<R>).post(declare_slot_handler::<R>),
        )
        .route(
            "/api/v1/tutors/:tutor_id/slots/withdraw",
            post(withdraw_slot_handler::<R>),
        )
        .with_state(service)
}

/// Query parameters for an availability search. The day code stays a free
/// string so unknown codes fall through to an empty result.
#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityQuery {
    pub(crate) day: String,
    pub(crate) start: String,
    pub(crate) end: String,
}

/// Body for declaring or withdrawing a slot. Unlike queries, writes use the
/// strict day enumeration; an unknown code is a validation failure.
#[derive(Debug, Deserialize)]
pub(crate) struct SlotRequest {
    pub(crate) day_of_week: DayOfWeek,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Query(query): Query<AvailabilityQuery>,
) -> Response
where
    R: AvailabilityRepository + 'static,
{
    let (start, end) = match parse_window(&query.start, &query.end) {
        Ok(window) => window,
        Err(detail) => {
            let payload = json!({ "error": detail });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.find_available_tutors(&query.day, start, end) {
        Ok(tutors) => {
            let tutors: Vec<String> = tutors.into_iter().map(|TutorId(id)| id).collect();
            let payload = json!({
                "day": query.day.trim().to_ascii_uppercase(),
                "tutors": tutors,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn declare_slot_handler<R>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Path(tutor_id): Path<String>,
    axum::Json(request): axum::Json<SlotRequest>,
) -> Response
where
    R: AvailabilityRepository + 'static,
{
    let slot = match slot_from_request(tutor_id, &request) {
        Ok(slot) => slot,
        Err(detail) => {
            let payload = json!({ "error": detail });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.declare_slot(slot) {
        Ok(stored) => (StatusCode::CREATED, axum::Json(stored)).into_response(),
        Err(error @ AvailabilityServiceError::InvalidSlot { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AvailabilityServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "slot already declared" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn withdraw_slot_handler<R>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Path(tutor_id): Path<String>,
    axum::Json(request): axum::Json<SlotRequest>,
) -> Response
where
    R: AvailabilityRepository + 'static,
{
    let slot = match slot_from_request(tutor_id, &request) {
        Ok(slot) => slot,
        Err(detail) => {
            let payload = json!({ "error": detail });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.withdraw_slot(&slot) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(AvailabilityServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "slot not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn list_slots_handler<R>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Path(tutor_id): Path<String>,
) -> Response
where
    R: AvailabilityRepository + 'static,
{
    match service.slots_for(&TutorId(tutor_id)) {
        Ok(slots) => (StatusCode::OK, axum::Json(slots)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn slot_from_request(tutor_id: String, request: &SlotRequest) -> Result<AvailabilitySlot, String> {
    let (start_time, end_time) = parse_window(&request.start_time, &request.end_time)?;
    Ok(AvailabilitySlot {
        tutor_id: TutorId(tutor_id),
        day_of_week: request.day_of_week,
        start_time,
        end_time,
    })
}

fn parse_window(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime), String> {
    Ok((parse_wire_time(start)?, parse_wire_time(end)?))
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub(crate) fn parse_wire_time(raw: &str) -> Result<NaiveTime, String> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|err| format!("failed to parse '{trimmed}' as HH:MM ({err})"))
}

fn internal_error(error: AvailabilityServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
