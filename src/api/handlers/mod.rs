pub mod exercises;
pub mod users;
