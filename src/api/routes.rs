//! Router configuration for the API.
//!
//! Centralized route registration, static file serving, and middleware
//! configuration.

use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router.
///
/// Routes:
/// - `POST /api/exercise/new-user` - register a username
/// - `POST /api/exercise/add` - append a log entry
/// - `GET /api/exercise/users` - list all users
/// - `GET /api/exercise/log` - read a user's log
///
/// Everything else falls through to static files under `public_dir`, and
/// unmatched paths produce a plain-text 404 "not found".
///
/// Middleware is applied in reverse order of declaration, so the request ID
/// is assigned before the logging middleware runs.
pub fn create_router(state: AppState, public_dir: &str) -> Router {
    let api_routes = Router::new()
        .route("/exercise/new-user", post(handlers::users::create_user))
        .route("/exercise/users", get(handlers::users::list_users))
        .route("/exercise/add", post(handlers::exercises::add_exercise))
        .route("/exercise/log", get(handlers::exercises::get_log));

    let static_files = ServeDir::new(public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use diesel_async::AsyncPgConnection;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;
    use diesel_async::pooled_connection::bb8::Pool;
    use serde_json::Value;
    use tower::ServiceExt;

    // A pool that is never connected: these tests only exercise request
    // paths that fail or answer before any database round-trip.
    fn test_router() -> Router {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new("postgres://localhost/unused");
        let pool = Pool::builder().build_unchecked(manager);
        create_router(AppState::new(pool), "public")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unmatched_route_is_404_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"not found");
    }

    #[tokio::test]
    async fn empty_username_is_a_soft_error_with_http_200() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/exercise/new-user")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"username":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Empty username"}));
    }

    #[tokio::test]
    async fn empty_username_via_form_body_is_the_same_soft_error() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/exercise/new-user")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("username="))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Empty username"}));
    }

    #[tokio::test]
    async fn non_numeric_duration_is_a_validation_failure() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/exercise/add")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"userId":"u1","description":"run","duration":"soon"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn missing_description_is_a_validation_failure() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/exercise/add")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("userId=u1&description=&duration=30"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "description is required");
    }

    #[tokio::test]
    async fn log_without_user_id_is_a_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/exercise/log?limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
