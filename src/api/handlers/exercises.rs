//! Exercise log handlers: append an entry, read a log back.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::api::dto::{
    AddExerciseRequest, AddExerciseResponse, LogQuery, LogResponse, SoftError,
};
use crate::state::AppState;
use crate::utils::validate::ValidatedBody;

/// POST /api/exercise/add
///
/// Appends a log entry for the given user. An unknown user id is a domain
/// outcome (soft error, HTTP 200); malformed descriptions and durations are
/// validation failures on the HTTP error channel.
pub async fn add_exercise(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<AddExerciseRequest>,
) -> Response {
    let result = state
        .services
        .exercises
        .add_entry(
            &payload.user_id,
            &payload.description,
            payload.duration.as_minutes(),
            payload.date.as_deref(),
        )
        .await;

    match result {
        Ok(outcome) => Json(AddExerciseResponse::from(outcome)).into_response(),
        Err(error) => match SoftError::for_log_access(&error) {
            Some(soft) => soft.into_response(),
            None => error.into_response(),
        },
    }
}

/// GET /api/exercise/log?userId=...&limit=...
///
/// Returns the user's log, optionally restricted to the first `limit`
/// entries. `count` always reflects the full log length. A non-numeric or
/// non-positive `limit` is treated as absent.
pub async fn get_log(State(state): State<AppState>, Query(query): Query<LogQuery>) -> Response {
    let result = state
        .services
        .exercises
        .get_log(&query.user_id, query.limit_entries())
        .await;

    match result {
        Ok(outcome) => Json(LogResponse::from(outcome)).into_response(),
        Err(error) => match SoftError::for_log_access(&error) {
            Some(soft) => soft.into_response(),
            None => error.into_response(),
        },
    }
}
