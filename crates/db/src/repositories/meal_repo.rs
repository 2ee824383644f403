//! Repository for the `meals` table. Meals are insert-only.

use sqlx::PgPool;

use ironlog_core::types::{DbId, Timestamp};

use crate::models::meal::{CreateMeal, MacroRow, Meal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, food_items, calories, protein, carbs, fats, confidence, \
     analyzed_at, created_at, updated_at";

/// Provides insert and read operations for meals.
pub struct MealRepo;

impl MealRepo {
    /// Insert a new meal, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMeal) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals
                (user_id, food_items, calories, protein, carbs, fats, confidence, analyzed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(input.user_id)
            .bind(&input.food_items)
            .bind(input.calories)
            .bind(input.protein)
            .bind(input.carbs)
            .bind(input.fats)
            .bind(&input.confidence)
            .bind(input.analyzed_at)
            .fetch_one(pool)
            .await
    }

    /// The caller's most recent meals by analysis time.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Meal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meals
             WHERE user_id = $1
             ORDER BY analyzed_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Macro columns of meals analyzed within `[start, end)`. The totals
    /// are reduced in-process.
    pub async fn macro_rows_between(
        pool: &PgPool,
        user_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<MacroRow>, sqlx::Error> {
        sqlx::query_as::<_, MacroRow>(
            "SELECT calories, protein, carbs, fats FROM meals
             WHERE user_id = $1 AND analyzed_at >= $2 AND analyzed_at < $3",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }
}
