//! Workout template models and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A template row from the `workout_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutTemplate {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `template_exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateExercise {
    pub id: DbId,
    pub template_id: DbId,
    pub exercise_name: String,
    pub exercise_order: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a template together with its exercise list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<CreateTemplateExercise>,
}

/// One exercise row of a new template. When `exercise_order` is omitted the
/// position in the submitted list is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateExercise {
    pub exercise_name: String,
    pub exercise_order: Option<i32>,
    pub notes: Option<String>,
}
