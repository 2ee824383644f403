//! Repository for `workout_templates` and `template_exercises`.

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::template::{CreateTemplateExercise, TemplateExercise, WorkoutTemplate};

/// Column list for `workout_templates`.
const T_COLUMNS: &str = "id, user_id, name, created_at, updated_at";

/// Column list for `template_exercises`.
const TE_COLUMNS: &str =
    "id, template_id, exercise_name, exercise_order, notes, created_at, updated_at";

/// Provides CRUD operations for workout templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<WorkoutTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_templates (user_id, name)
             VALUES ($1, $2)
             RETURNING {T_COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Insert one exercise row for a template.
    pub async fn add_exercise(
        pool: &PgPool,
        template_id: DbId,
        order: i32,
        input: &CreateTemplateExercise,
    ) -> Result<TemplateExercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_exercises (template_id, exercise_name, exercise_order, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {TE_COLUMNS}"
        );
        sqlx::query_as::<_, TemplateExercise>(&query)
            .bind(template_id)
            .bind(&input.exercise_name)
            .bind(order)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List the caller's templates ordered by name.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<WorkoutTemplate>, sqlx::Error> {
        let query =
            format!("SELECT {T_COLUMNS} FROM workout_templates WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a template by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<WorkoutTemplate>, sqlx::Error> {
        let query =
            format!("SELECT {T_COLUMNS} FROM workout_templates WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a template's exercises ordered by their order column, scoped to
    /// the template's owner.
    pub async fn list_exercises(
        pool: &PgPool,
        user_id: DbId,
        template_id: DbId,
    ) -> Result<Vec<TemplateExercise>, sqlx::Error> {
        let query = format!(
            "SELECT te.id, te.template_id, te.exercise_name, te.exercise_order, te.notes,
                    te.created_at, te.updated_at
             FROM template_exercises te
             JOIN workout_templates t ON t.id = te.template_id
             WHERE te.template_id = $2 AND t.user_id = $1
             ORDER BY te.exercise_order ASC"
        );
        sqlx::query_as::<_, TemplateExercise>(&query)
            .bind(user_id)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a template; the schema cascades to its exercise rows. Past
    /// workouts created from it are untouched (they hold copies).
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_templates WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
