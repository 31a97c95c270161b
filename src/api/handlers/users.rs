//! User registration and listing handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::api::dto::{CreateUserRequest, SoftError, UserResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedBody;

/// POST /api/exercise/new-user
///
/// Registers a username. Empty (after trimming) and already-taken usernames
/// are domain outcomes and come back as soft errors with HTTP 200; anything
/// else falls through to the HTTP error channel.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<CreateUserRequest>,
) -> Response {
    match state.services.users.register(&payload.username).await {
        Ok(user) => Json(UserResponse::from(user)).into_response(),
        Err(error) => match SoftError::for_registration(&error) {
            Some(soft) => soft.into_response(),
            None => error.into_response(),
        },
    }
}

/// GET /api/exercise/users
///
/// Returns every registered user as `{username, id}` pairs, in the store's
/// native retrieval order.
pub async fn list_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = state.services.users.list_users().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses).into_response())
}
