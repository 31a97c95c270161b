//! User registration and listing business logic.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::UserRepository;

/// Service for user registration and listing.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Registers a new user under the trimmed username.
    ///
    /// Surrounding whitespace is stripped; an empty result is a validation
    /// failure. A taken username surfaces as `AppError::Duplicate` from the
    /// unique index, with no lookup-before-create race.
    pub async fn register(&self, username: &str) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("username", "Empty username"));
        }

        let new_user = NewUser {
            id: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
        };
        self.repo.create(new_user).await
    }

    /// Lists all users in the store's native retrieval order.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }
}
