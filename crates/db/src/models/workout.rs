//! Workout entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A workout row from the `workouts` table.
///
/// `duration` is `None` while the session is in progress; finishing the
/// workout stores the elapsed minutes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub date: Timestamp,
    pub time_started: Timestamp,
    pub duration: Option<i32>,
    pub template_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new workout. `date` and `time_started` are set by the
/// repository at insert time.
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: DbId,
    pub name: String,
    pub template_id: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating an existing workout. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkout {
    pub name: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

/// A workout row annotated with its exercise count, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutSummary {
    pub id: DbId,
    pub name: String,
    pub date: Timestamp,
    pub duration: Option<i32>,
    pub exercise_count: i64,
}
