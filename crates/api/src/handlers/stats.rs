//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use ironlog_core::calendar;
use ironlog_db::repositories::{SetRepo, WorkoutRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The four dashboard numbers. All degrade to zero for an empty account.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    /// Workouts dated since the most recent Sunday 00:00 UTC.
    pub workouts_this_week: i64,
    /// Σ weight × reps over this week's non-warmup sets, rounded.
    pub total_volume_this_week: i64,
    /// Mean of this week's recorded durations in minutes, rounded; 0 if none.
    pub average_duration_mins: i32,
    /// Consecutive training days ending today or yesterday.
    pub current_streak_days: u32,
}

/// GET /api/v1/stats/summary
///
/// Served from the per-user cache when fresh; otherwise recomputed from
/// four aggregate reads and cached.
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<StatsSummary>>> {
    let user_id = auth_user.user_id;

    if let Some(cached) = state.stats_cache.get(user_id).await {
        return Ok(Json(DataResponse { data: cached }));
    }

    let now = Utc::now();
    let week_start = calendar::week_start(now);

    let workouts_this_week = WorkoutRepo::count_since(&state.pool, user_id, week_start).await?;

    let volume_rows = SetRepo::volume_rows_since(&state.pool, user_id, week_start).await?;
    let total_volume_this_week = volume_rows
        .iter()
        .map(|row| row.weight * f64::from(row.reps))
        .sum::<f64>()
        .round() as i64;

    let durations = WorkoutRepo::durations_since(&state.pool, user_id, week_start).await?;
    let average_duration_mins = if durations.is_empty() {
        0
    } else {
        let total: i64 = durations.iter().map(|d| i64::from(*d)).sum();
        (total as f64 / durations.len() as f64).round() as i32
    };

    let workout_days = WorkoutRepo::workout_days(&state.pool, user_id).await?;
    let current_streak_days = calendar::current_streak(&workout_days, now.date_naive());

    let summary = StatsSummary {
        workouts_this_week,
        total_volume_this_week,
        average_duration_mins,
        current_streak_days,
    };
    state.stats_cache.insert(user_id, summary.clone()).await;

    Ok(Json(DataResponse { data: summary }))
}
