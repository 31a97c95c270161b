use chrono::NaiveDateTime;
use diesel::prelude::*;

/// A single exercise log entry belonging to a user.
///
/// Rows are append-only: the API never updates or deletes individual
/// entries, and the serial `id` fixes insertion order for log slicing.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::exercise_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExerciseLog {
    pub id: i64,
    pub user_id: String,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDateTime,
}

/// Insertable exercise log entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::exercise_logs)]
pub struct NewExerciseLog {
    pub user_id: String,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDateTime,
}
