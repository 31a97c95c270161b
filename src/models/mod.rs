mod exercise_log;
mod user;

pub use exercise_log::{ExerciseLog, NewExerciseLog};
pub use user::{NewUser, User};
