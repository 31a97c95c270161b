//! Middleware components: request identifiers, request/response logging,
//! and the AppError → HTTP response mapping.

mod error_handler;
mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
