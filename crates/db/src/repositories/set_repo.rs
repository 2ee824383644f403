//! Repository for the `sets` table.
//!
//! Ownership is derived by joining through the parent exercise to its
//! workout's `user_id`.

use sqlx::PgPool;

use ironlog_core::types::{DbId, Timestamp};

use crate::models::set::{CreateSet, UpdateSet, VolumeRow, WorkoutSet};

/// Qualified column list for queries on `sets s`.
const S_COLUMNS: &str = "s.id, s.exercise_id, s.set_order, s.weight, s.reps, s.rpe, \
     s.is_confirmed, s.is_warmup, s.created_at, s.updated_at";

/// Unqualified column list for the INSERT ... RETURNING form.
const COLUMNS: &str = "id, exercise_id, set_order, weight, reps, rpe, \
     is_confirmed, is_warmup, created_at, updated_at";

/// Provides CRUD and volume reads for sets.
pub struct SetRepo;

impl SetRepo {
    /// Insert a set at the next order position (max+1, starting at 1) in a
    /// single statement. Omitted weight/reps/rpe default from the previous
    /// set of the same exercise; with no previous set, weight and reps
    /// default to 0 and rpe stays absent.
    ///
    /// Returns `None` when the caller owns no exercise with `exercise_id`.
    pub async fn create_with_next_order(
        pool: &PgPool,
        user_id: DbId,
        exercise_id: DbId,
        input: &CreateSet,
    ) -> Result<Option<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "INSERT INTO sets (exercise_id, set_order, weight, reps, rpe)
             SELECT e.id,
                    COALESCE((SELECT MAX(s.set_order) FROM sets s WHERE s.exercise_id = e.id), 0) + 1,
                    COALESCE($3, (SELECT s.weight FROM sets s WHERE s.exercise_id = e.id
                                  ORDER BY s.set_order DESC LIMIT 1), 0),
                    COALESCE($4, (SELECT s.reps FROM sets s WHERE s.exercise_id = e.id
                                  ORDER BY s.set_order DESC LIMIT 1), 0),
                    COALESCE($5, (SELECT s.rpe FROM sets s WHERE s.exercise_id = e.id
                                  ORDER BY s.set_order DESC LIMIT 1))
             FROM exercises e
             JOIN workouts w ON w.id = e.workout_id
             WHERE e.id = $2 AND w.user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(user_id)
            .bind(exercise_id)
            .bind(input.weight)
            .bind(input.reps)
            .bind(input.rpe)
            .fetch_optional(pool)
            .await
    }

    /// Find a set by ID, scoped through its ancestor workout's owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "SELECT {S_COLUMNS} FROM sets s
             JOIN exercises e ON e.id = s.exercise_id
             JOIN workouts w ON w.id = e.workout_id
             WHERE s.id = $2 AND w.user_id = $1"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All sets of one workout, ordered by exercise order then set order.
    /// Used to assemble the workout detail view without per-exercise queries.
    pub async fn list_by_workout(
        pool: &PgPool,
        user_id: DbId,
        workout_id: DbId,
    ) -> Result<Vec<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "SELECT {S_COLUMNS} FROM sets s
             JOIN exercises e ON e.id = s.exercise_id
             JOIN workouts w ON w.id = e.workout_id
             WHERE e.workout_id = $2 AND w.user_id = $1
             ORDER BY e.exercise_order ASC, s.set_order ASC"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(user_id)
            .bind(workout_id)
            .fetch_all(pool)
            .await
    }

    /// Update a set. Only non-`None` fields in `input` are applied.
    ///
    /// The caller is responsible for validating the resulting state first
    /// (a set may never be stored with weight and reps both zero).
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateSet,
    ) -> Result<Option<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "UPDATE sets s SET
                weight = COALESCE($3, s.weight),
                reps = COALESCE($4, s.reps),
                rpe = COALESCE($5, s.rpe),
                is_confirmed = COALESCE($6, s.is_confirmed),
                is_warmup = COALESCE($7, s.is_warmup),
                updated_at = NOW()
             FROM exercises e
             JOIN workouts w ON w.id = e.workout_id
             WHERE s.id = $2 AND e.id = s.exercise_id AND w.user_id = $1
             RETURNING {S_COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(user_id)
            .bind(id)
            .bind(input.weight)
            .bind(input.reps)
            .bind(input.rpe)
            .bind(input.is_confirmed)
            .bind(input.is_warmup)
            .fetch_optional(pool)
            .await
    }

    /// Delete a set. Remaining sets keep their order values.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM sets s
             USING exercises e, workouts w
             WHERE s.id = $2 AND e.id = s.exercise_id
               AND w.id = e.workout_id AND w.user_id = $1",
        )
        .bind(user_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Weight and reps of every non-warmup set belonging to the caller's
    /// workouts with `date >= since`. The volume sum is reduced in-process.
    pub async fn volume_rows_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<VolumeRow>, sqlx::Error> {
        sqlx::query_as::<_, VolumeRow>(
            "SELECT s.weight, s.reps FROM sets s
             JOIN exercises e ON e.id = s.exercise_id
             JOIN workouts w ON w.id = e.workout_id
             WHERE w.user_id = $1 AND w.date >= $2 AND s.is_warmup = FALSE",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
