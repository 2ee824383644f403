//! Meal entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A meal row from the `meals` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meal {
    pub id: DbId,
    pub user_id: DbId,
    pub food_items: Vec<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// One of `high`, `medium`, `low`, or `manual`.
    pub confidence: String,
    pub analyzed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a meal row.
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: DbId,
    pub food_items: Vec<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub confidence: String,
    pub analyzed_at: Timestamp,
}

/// Macro columns of one meal, for the daily totals reduction.
#[derive(Debug, Clone, FromRow)]
pub struct MacroRow {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}
