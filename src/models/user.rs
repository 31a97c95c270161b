use chrono::NaiveDateTime;
use diesel::prelude::*;

/// User model for reading from the database.
///
/// The `id` is an opaque generated string handle; it is the public
/// identifier clients use for all log operations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

/// NewUser model for inserting new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub id: String,
    pub username: String,
}
