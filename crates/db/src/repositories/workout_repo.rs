//! Repository for the `workouts` table.
//!
//! Every method is scoped to the owning user: a workout belonging to someone
//! else matches no rows and is indistinguishable from one that does not exist.

use chrono::NaiveDate;
use sqlx::PgPool;

use ironlog_core::types::{DbId, Timestamp};

use crate::models::workout::{CreateWorkout, UpdateWorkout, Workout, WorkoutSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, name, date, time_started, duration, template_id, notes, created_at, updated_at";

/// Provides CRUD and aggregation reads for workouts.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a new workout with `date = time_started = now`, returning the
    /// created row. `duration` starts NULL (session in progress).
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkout,
        now: Timestamp,
    ) -> Result<Workout, sqlx::Error> {
        let query = format!(
            "INSERT INTO workouts (user_id, name, date, time_started, template_id, notes)
             VALUES ($1, $2, $3, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(now)
            .bind(input.template_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a workout by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the caller's workouts by date descending, each annotated with
    /// its exercise count. `limit` of `None` returns everything.
    pub async fn list_summaries(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<WorkoutSummary>, sqlx::Error> {
        sqlx::query_as::<_, WorkoutSummary>(
            "SELECT w.id, w.name, w.date, w.duration, COUNT(e.id) AS exercise_count
             FROM workouts w
             LEFT JOIN exercises e ON e.workout_id = w.id
             WHERE w.user_id = $1
             GROUP BY w.id
             ORDER BY w.date DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Update a workout. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the caller owns no workout with the given `id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateWorkout,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!(
            "UPDATE workouts SET
                name = COALESCE($3, name),
                duration = COALESCE($4, duration),
                notes = COALESCE($5, notes),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.duration)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Finish a workout: store `round((now - time_started) / 60s)` minutes.
    ///
    /// Computed from the stored start time in a single statement, so a
    /// second call recomputes and overwrites with the later `now`.
    pub async fn finish(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!(
            "UPDATE workouts SET
                duration = ROUND(EXTRACT(EPOCH FROM ($3::timestamptz - time_started)) / 60)::INT,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a workout; the schema cascades to exercises and sets.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the caller's workouts with `date >= since`.
    pub async fn count_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM workouts WHERE user_id = $1 AND date >= $2")
                .bind(user_id)
                .bind(since)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Non-null durations of the caller's workouts with `date >= since`.
    pub async fn durations_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<i32>, sqlx::Error> {
        let rows: Vec<(i32,)> = sqlx::query_as(
            "SELECT duration FROM workouts
             WHERE user_id = $1 AND date >= $2 AND duration IS NOT NULL",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(d,)| d).collect())
    }

    /// Distinct calendar days (UTC) on which the caller trained, most recent
    /// first. Feeds the streak walk.
    pub async fn workout_days(pool: &PgPool, user_id: DbId) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            "SELECT DISTINCT date::date AS day FROM workouts
             WHERE user_id = $1
             ORDER BY day DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(d,)| d).collect())
    }
}
