//! Conversion of Diesel errors into structured AppError variants.
//!
//! The schema pushes the username-uniqueness invariant into a unique index,
//! so a concurrent duplicate registration surfaces here as a
//! `UniqueViolation` and is reported as `AppError::Duplicate` instead of
//! being checked (racily) before the insert.

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::AppError;

/// Converts a Diesel error to an appropriate AppError variant.
///
/// `operation` describes the database operation that failed and is carried
/// into the `Database` variant for log context.
pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let (field, value) = parse_key_detail(info.message())
                .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
            AppError::Duplicate {
                entity: info.table_name().unwrap_or("users").to_string(),
                field,
                value,
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
            AppError::Validation {
                field: info.column_name().unwrap_or("unknown").to_string(),
                reason: "field is required".to_string(),
            }
        }
        DieselError::NotFound => AppError::NotFound {
            entity: "resource".to_string(),
            field: "id".to_string(),
            value: "unknown".to_string(),
        },
        other => AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::from(other),
        },
    }
}

/// Extracts `(field, value)` from a Postgres unique-violation message of the
/// form `... Key (username)=(alice) already exists.`
fn parse_key_detail(message: &str) -> Option<(String, String)> {
    let start = message.find("Key (")? + "Key (".len();
    let rest = &message[start..];
    let field_end = rest.find(")=(")?;
    let field = &rest[..field_end];
    let value_start = field_end + ")=(".len();
    let value_end = rest[value_start..].find(')')? + value_start;
    let value = &rest[value_start..value_end];
    Some((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInfo {
        message: String,
        table: Option<String>,
        column: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            self.table.as_deref()
        }
        fn column_name(&self) -> Option<&str> {
            self.column.as_deref()
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn unique_violation_maps_to_duplicate() {
        let info = MockInfo {
            message: "duplicate key value violates unique constraint \"users_username_key\"\nDETAIL: Key (username)=(alice) already exists.".to_string(),
            table: Some("users".to_string()),
            column: None,
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match convert_diesel_error(error, "insert user") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "users");
                assert_eq!(field, "username");
                assert_eq!(value, "alice");
            }
            other => panic!("Expected Duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn not_null_violation_maps_to_validation() {
        let info = MockInfo {
            message: "null value in column \"description\" violates not-null constraint"
                .to_string(),
            table: Some("exercise_logs".to_string()),
            column: Some("description".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, Box::new(info));

        match convert_diesel_error(error, "insert log") {
            AppError::Validation { field, .. } => assert_eq!(field, "description"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn row_absence_maps_to_not_found() {
        let error = DieselError::NotFound;
        assert!(matches!(
            convert_diesel_error(error, "find user"),
            AppError::NotFound { .. }
        ));
    }

    #[test]
    fn parses_key_detail_from_message() {
        let message = "duplicate key value violates unique constraint \"users_username_key\"\nDETAIL: Key (username)=(bob) already exists.";
        assert_eq!(
            parse_key_detail(message),
            Some(("username".to_string(), "bob".to_string()))
        );
    }

    #[test]
    fn malformed_message_yields_none() {
        assert_eq!(parse_key_detail("no detail here"), None);
    }
}
