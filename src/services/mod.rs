//! Service layer for business logic operations.
//!
//! Services encapsulate the domain rules (username trimming, date
//! resolution, duration coercion, count derivation) and coordinate between
//! repositories and handlers.

mod exercise_service;
mod user_service;

pub use exercise_service::{ExerciseService, LogAppended, UserLog};
pub use user_service::UserService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub exercises: ExerciseService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: UserService::new(repos.users.clone()),
            exercises: ExerciseService::new(repos.users, repos.exercise_logs),
        }
    }
}
