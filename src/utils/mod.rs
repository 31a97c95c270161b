pub mod dates;
pub mod validate;
