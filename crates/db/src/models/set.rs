//! Set entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A set row from the `sets` table.
///
/// `set_order` starts at 1 within an exercise. Weight is a unit-less stored
/// value interpreted as pounds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutSet {
    pub id: DbId,
    pub exercise_id: DbId,
    pub set_order: i32,
    pub weight: f64,
    pub reps: i32,
    pub rpe: Option<f64>,
    pub is_confirmed: bool,
    pub is_warmup: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a set. Omitted fields default from the previous set of the
/// same exercise (weight/reps fall back to 0, rpe to absent).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSet {
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub rpe: Option<f64>,
}

/// DTO for patching a set. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSet {
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub rpe: Option<f64>,
    pub is_confirmed: Option<bool>,
    pub is_warmup: Option<bool>,
}

/// Weight and rep count of one non-warmup set, for volume aggregation.
#[derive(Debug, Clone, FromRow)]
pub struct VolumeRow {
    pub weight: f64,
    pub reps: i32,
}
