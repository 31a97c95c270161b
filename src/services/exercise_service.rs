//! Exercise log business logic: appending entries and reading logs back.

use crate::error::{AppError, AppResult};
use crate::models::{ExerciseLog, NewExerciseLog, User};
use crate::repositories::{ExerciseLogRepository, UserRepository};
use crate::utils::dates;

/// Outcome of appending a log entry.
#[derive(Debug)]
pub struct LogAppended {
    pub user: User,
    pub entry: ExerciseLog,
    /// Log length after the append, derived with a count query.
    pub count: i64,
}

/// A user's log as read back for the log endpoint.
#[derive(Debug)]
pub struct UserLog {
    pub user: User,
    pub entries: Vec<ExerciseLog>,
    /// Full log length, independent of any `limit` applied to `entries`.
    pub count: i64,
}

/// Service for exercise log operations.
#[derive(Clone)]
pub struct ExerciseService {
    users: UserRepository,
    logs: ExerciseLogRepository,
}

impl ExerciseService {
    /// Creates a new ExerciseService over the user and log repositories.
    pub fn new(users: UserRepository, logs: ExerciseLogRepository) -> Self {
        Self { users, logs }
    }

    /// Appends a log entry to the user's log.
    ///
    /// `duration` arrives pre-coerced from the wire (number or numeric
    /// string); `None` means the coercion failed and the entry is rejected.
    /// A missing or unparsable `date` is replaced with the current time.
    /// An unknown `user_id` yields `NotFound` and nothing is persisted.
    pub async fn add_entry(
        &self,
        user_id: &str,
        description: &str,
        duration: Option<f64>,
        date: Option<&str>,
    ) -> AppResult<LogAppended> {
        let duration = duration
            .ok_or_else(|| AppError::validation("duration", "duration must be a number"))?;
        if description.is_empty() {
            return Err(AppError::validation("description", "description is required"));
        }

        let user = self.find_user(user_id).await?;
        let entry = self
            .logs
            .append(NewExerciseLog {
                user_id: user.id.clone(),
                description: description.to_string(),
                duration,
                date: dates::resolve_entry_date(date),
            })
            .await?;
        let count = self.logs.count_for_user(&user.id).await?;

        Ok(LogAppended { user, entry, count })
    }

    /// Reads a user's log, optionally restricted to the first `limit`
    /// entries. `count` always reflects the full log length.
    pub async fn get_log(&self, user_id: &str, limit: Option<i64>) -> AppResult<UserLog> {
        let user = self.find_user(user_id).await?;
        let entries = self.logs.list_for_user(&user.id, limit).await?;
        let count = self.logs.count_for_user(&user.id).await?;

        Ok(UserLog {
            user,
            entries,
            count,
        })
    }

    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: user_id.to_string(),
            })
    }
}
