//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - registration and listing
//! - `exercise` - log append and log retrieval
//! - `error` - hard-error and soft-error response bodies

mod error;
mod exercise;
mod user;

pub use error::{ErrorResponse, SoftError};
pub use exercise::{
    AddExerciseRequest, AddExerciseResponse, DurationInput, LogEntryResponse, LogQuery,
    LogResponse,
};
pub use user::{CreateUserRequest, UserResponse};
