//! Exercise log DTOs for API requests and responses.

use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::models::ExerciseLog;
use crate::services::{LogAppended, UserLog};
use crate::utils::dates;

/// Wire form of `duration`: a JSON number, or a string holding one.
///
/// Urlencoded forms always deliver strings, so both shapes must be
/// accepted. Coercion failure is reported by `as_minutes` returning
/// `None`; the service turns that into a validation failure instead of
/// persisting a NaN sentinel.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(f64),
    Text(String),
}

impl DurationInput {
    /// Coerces the input to a finite number of minutes.
    pub fn as_minutes(&self) -> Option<f64> {
        let value = match self {
            DurationInput::Number(n) => *n,
            DurationInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Request body for appending a log entry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    pub user_id: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub duration: DurationInput,
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for the log endpoint.
///
/// `limit` stays a raw string: the contract treats a non-numeric or
/// non-positive value as absent rather than as an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<String>,
}

impl LogQuery {
    /// Returns the entry limit when it parses as a positive integer.
    pub fn limit_entries(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
    }
}

/// Response body for a successful log append.
#[derive(Debug, Serialize)]
pub struct AddExerciseResponse {
    pub username: String,
    pub id: String,
    pub count: i64,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<LogAppended> for AddExerciseResponse {
    fn from(outcome: LogAppended) -> Self {
        Self {
            username: outcome.user.username,
            id: outcome.user.id,
            count: outcome.count,
            description: outcome.entry.description,
            duration: outcome.entry.duration,
            date: dates::format_entry_date(outcome.entry.date),
        }
    }
}

/// A single log entry as exposed to clients; internal identifiers are
/// stripped.
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<ExerciseLog> for LogEntryResponse {
    fn from(entry: ExerciseLog) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: dates::format_entry_date(entry.date),
        }
    }
}

/// Response body for the log endpoint.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub id: String,
    pub count: i64,
    pub log: Vec<LogEntryResponse>,
}

impl From<UserLog> for LogResponse {
    fn from(outcome: UserLog) -> Self {
        Self {
            username: outcome.user.username,
            id: outcome.user.id,
            count: outcome.count,
            log: outcome
                .entries
                .into_iter()
                .map(LogEntryResponse::from)
                .collect(),
        }
    }
}

/// Serializes integral durations as JSON integers (30, not 30.0) so
/// whole-minute values round-trip in the form clients submitted them.
fn serialize_duration<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
