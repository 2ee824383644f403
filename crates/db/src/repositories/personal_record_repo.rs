//! Repository for the `personal_records` table. Read-only here: records are
//! maintained out of band.

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::personal_record::PersonalRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, exercise_name, weight, reps, estimated_1rm, achieved_at, \
     created_at, updated_at";

/// Provides read access to personal records.
pub struct PersonalRecordRepo;

impl PersonalRecordRepo {
    /// The caller's records, newest first, optionally filtered to one
    /// exercise name.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        exercise_name: Option<&str>,
    ) -> Result<Vec<PersonalRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personal_records
             WHERE user_id = $1 AND ($2::text IS NULL OR exercise_name = $2)
             ORDER BY achieved_at DESC"
        );
        sqlx::query_as::<_, PersonalRecord>(&query)
            .bind(user_id)
            .bind(exercise_name)
            .fetch_all(pool)
            .await
    }
}
