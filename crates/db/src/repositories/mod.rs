//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Every method touching a
//! user-owned row takes the caller's `user_id` and folds it into the SQL
//! predicate (directly, or via a join through the ancestor workout), so a
//! row the caller does not own behaves exactly like a missing row.

pub mod exercise_repo;
pub mod meal_repo;
pub mod personal_record_repo;
pub mod session_repo;
pub mod set_repo;
pub mod template_repo;
pub mod user_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepo;
pub use meal_repo::MealRepo;
pub use personal_record_repo::PersonalRecordRepo;
pub use session_repo::SessionRepo;
pub use set_repo::SetRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
pub use workout_repo::WorkoutRepo;
