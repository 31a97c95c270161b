//! Repository layer for data access operations.
//!
//! Provides async operations over the users and exercise_logs tables.

mod exercise_log_repo;
mod user_repo;

pub use exercise_log_repo::ExerciseLogRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub exercise_logs: ExerciseLogRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            exercise_logs: ExerciseLogRepository::new(pool),
        }
    }
}
