//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

/// Request body for registering a new user.
///
/// Emptiness of the trimmed username is a domain rule (soft error), not a
/// validator rule, so no length constraint appears here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Response body for user data: the public shape is just the username and
/// the opaque id handle.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}
