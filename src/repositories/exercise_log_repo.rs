//! Exercise log repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{ExerciseLog, NewExerciseLog};

/// Repository for the append-only exercise_logs table.
#[derive(Clone)]
pub struct ExerciseLogRepository {
    pool: AsyncDbPool,
}

impl ExerciseLogRepository {
    /// Creates a new ExerciseLogRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Appends a log entry and returns the stored row.
    pub async fn append(&self, new_entry: NewExerciseLog) -> Result<ExerciseLog, AppError> {
        use crate::schema::exercise_logs::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(exercise_logs)
            .values(&new_entry)
            .returning(ExerciseLog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists a user's log entries in insertion order.
    ///
    /// When `limit` is given, only the first `limit` entries are returned
    /// (a slice from the start, not the most recent).
    pub async fn list_for_user(
        &self,
        owner_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<ExerciseLog>, AppError> {
        use crate::schema::exercise_logs::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = exercise_logs
            .filter(user_id.eq(owner_id))
            .order(id.asc())
            .select(ExerciseLog::as_select())
            .into_boxed();
        if let Some(n) = limit {
            query = query.limit(n);
        }

        query.load(&mut conn).await.map_err(AppError::from)
    }

    /// Counts a user's log entries.
    ///
    /// The log length is always derived here on read; it is never stored,
    /// so it cannot drift from the actual rows.
    pub async fn count_for_user(&self, owner_id: &str) -> Result<i64, AppError> {
        use crate::schema::exercise_logs::dsl::*;
        let mut conn = self.pool.get().await?;

        exercise_logs
            .filter(user_id.eq(owner_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
