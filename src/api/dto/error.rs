//! Error response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Standard error response format for the HTTP error channel.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// Domain failure reported inside a success-status response body.
///
/// Empty username, username taken, and unknown user id are returned as
/// HTTP 200 with an `error` field. This is a compatibility contract:
/// existing clients detect these cases by checking the `error` field, not
/// the status code. See README for the argument for eventually replacing
/// it with real error statuses.
#[derive(Debug, Serialize)]
pub struct SoftError {
    pub error: String,
}

impl SoftError {
    /// Unknown userID soft error, shared by the add and log endpoints.
    pub fn unknown_user_id() -> Self {
        Self::new("Unknown userID")
    }

    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }

    /// Maps registration failures to their soft-error bodies.
    ///
    /// An empty (trimmed) username and a taken username are domain outcomes;
    /// every other error stays on the HTTP error channel (`None`).
    pub fn for_registration(error: &AppError) -> Option<Self> {
        match error {
            AppError::Validation { .. } => Some(Self::new("Empty username")),
            AppError::Duplicate { .. } => Some(Self::new("Username Already Taken")),
            _ => None,
        }
    }

    /// Maps log-access failures (append and read) to their soft-error bodies.
    ///
    /// Only an unknown user id is a domain outcome here; validation failures
    /// on description or duration stay on the HTTP error channel (`None`).
    pub fn for_log_access(error: &AppError) -> Option<Self> {
        match error {
            AppError::NotFound { .. } => Some(Self::unknown_user_id()),
            _ => None,
        }
    }
}

impl IntoResponse for SoftError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_error_serializes_to_error_field() {
        let body = serde_json::to_value(SoftError::new("Empty username")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Empty username"}));
    }

    #[test]
    fn soft_error_response_is_http_200() {
        let response = SoftError::unknown_user_id().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn taken_username_maps_to_its_soft_error() {
        // The unique index reports a second registration of the same name
        // as Duplicate; the contract reports it as "Username Already Taken".
        let error = AppError::Duplicate {
            entity: "users".to_string(),
            field: "username".to_string(),
            value: "alice".to_string(),
        };
        let soft = SoftError::for_registration(&error).unwrap();
        assert_eq!(
            serde_json::to_value(soft).unwrap(),
            serde_json::json!({"error": "Username Already Taken"})
        );
    }

    #[test]
    fn empty_username_maps_to_its_soft_error() {
        let error = AppError::validation("username", "Empty username");
        let soft = SoftError::for_registration(&error).unwrap();
        assert_eq!(
            serde_json::to_value(soft).unwrap(),
            serde_json::json!({"error": "Empty username"})
        );
    }

    #[test]
    fn unknown_user_maps_to_its_soft_error_for_log_access() {
        let error = AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: "nope".to_string(),
        };
        let soft = SoftError::for_log_access(&error).unwrap();
        assert_eq!(
            serde_json::to_value(soft).unwrap(),
            serde_json::json!({"error": "Unknown userID"})
        );
    }

    #[test]
    fn hard_errors_pass_through_both_mappings() {
        let database = AppError::Database {
            operation: "insert user".to_string(),
            source: anyhow::anyhow!("connection reset"),
        };
        assert!(SoftError::for_registration(&database).is_none());
        assert!(SoftError::for_log_access(&database).is_none());

        // Validation failures on log entries are hard errors, not soft ones.
        let validation = AppError::validation("duration", "duration must be a number");
        assert!(SoftError::for_log_access(&validation).is_none());
    }

    #[test]
    fn error_response_skips_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"code": "NOT_FOUND", "message": "gone"})
        );
    }
}
