//! Personal record model. Read-only within this system.

use ironlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A personal record row from the `personal_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonalRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub estimated_1rm: f64,
    pub achieved_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
