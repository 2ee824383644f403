//! Exercise entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An exercise row from the `exercises` table.
///
/// `exercise_order` starts at 0 within a workout and is assigned max+1 at
/// insert time. Gaps after deletion are legal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: DbId,
    pub workout_id: DbId,
    pub exercise_name: String,
    pub exercise_order: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an exercise to a workout. The order is computed server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExercise {
    pub exercise_name: String,
    pub notes: Option<String>,
}

/// DTO for updating an existing exercise. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExercise {
    pub exercise_name: Option<String>,
    pub notes: Option<String>,
}
