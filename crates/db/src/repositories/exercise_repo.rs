//! Repository for the `exercises` table.
//!
//! Exercises have no `user_id` of their own; ownership is derived from the
//! parent workout in every predicate.

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::exercise::{CreateExercise, Exercise, UpdateExercise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, workout_id, exercise_name, exercise_order, notes, created_at, updated_at";

/// Qualified column list for queries that join through `workouts`.
const E_COLUMNS: &str = "e.id, e.workout_id, e.exercise_name, e.exercise_order, e.notes, \
     e.created_at, e.updated_at";

/// Provides CRUD operations for exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert an exercise at the next order position (max+1, or 0 for the
    /// first) in a single statement, so two concurrent adds cannot observe
    /// the same current maximum.
    ///
    /// Returns `None` when the caller owns no workout with `workout_id`.
    pub async fn create_with_next_order(
        pool: &PgPool,
        user_id: DbId,
        workout_id: DbId,
        input: &CreateExercise,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises (workout_id, exercise_name, exercise_order, notes)
             SELECT w.id, $3,
                    COALESCE((SELECT MAX(e.exercise_order) + 1
                              FROM exercises e WHERE e.workout_id = w.id), 0),
                    $4
             FROM workouts w
             WHERE w.id = $2 AND w.user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(workout_id)
            .bind(&input.exercise_name)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Copy every exercise of a template into a workout, preserving
    /// name, order, and notes. The template must belong to the caller.
    ///
    /// Returns the number of exercises copied.
    pub async fn copy_from_template(
        pool: &PgPool,
        user_id: DbId,
        workout_id: DbId,
        template_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO exercises (workout_id, exercise_name, exercise_order, notes)
             SELECT $2, te.exercise_name, te.exercise_order, te.notes
             FROM template_exercises te
             JOIN workout_templates t ON t.id = te.template_id
             WHERE te.template_id = $3 AND t.user_id = $1
             ORDER BY te.exercise_order",
        )
        .bind(user_id)
        .bind(workout_id)
        .bind(template_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List a workout's exercises ordered by their order column.
    pub async fn list_by_workout(
        pool: &PgPool,
        user_id: DbId,
        workout_id: DbId,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS} FROM exercises e
             JOIN workouts w ON w.id = e.workout_id
             WHERE e.workout_id = $2 AND w.user_id = $1
             ORDER BY e.exercise_order ASC"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(workout_id)
            .fetch_all(pool)
            .await
    }

    /// Find an exercise by ID, scoped through its parent workout's owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS} FROM exercises e
             JOIN workouts w ON w.id = e.workout_id
             WHERE e.id = $2 AND w.user_id = $1"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an exercise. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the row is missing or the caller does not own its
    /// workout.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateExercise,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises e SET
                exercise_name = COALESCE($3, e.exercise_name),
                notes = COALESCE($4, e.notes),
                updated_at = NOW()
             FROM workouts w
             WHERE e.id = $2 AND w.id = e.workout_id AND w.user_id = $1
             RETURNING {E_COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(id)
            .bind(&input.exercise_name)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exercise; the schema cascades to its sets. Remaining
    /// exercises keep their order values (gaps are legal).
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM exercises e
             USING workouts w
             WHERE e.id = $2 AND w.id = e.workout_id AND w.user_id = $1",
        )
        .bind(user_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The caller's most recently used distinct exercise names, capped.
    pub async fn distinct_names(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT exercise_name FROM (
                 SELECT e.exercise_name, MAX(e.created_at) AS last_used
                 FROM exercises e
                 JOIN workouts w ON w.id = e.workout_id
                 WHERE w.user_id = $1
                 GROUP BY e.exercise_name
             ) names
             ORDER BY last_used DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
