//! Handlers for the `/exercises` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::exercise::{Exercise, UpdateExercise};
use ironlog_db::models::set::{CreateSet, WorkoutSet};
use ironlog_db::repositories::{ExerciseRepo, SetRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Cap on the exercise-name history list.
const HISTORY_LIMIT: i64 = 20;

/// GET /api/v1/exercises/history
///
/// The caller's most recently used distinct exercise names, for autocomplete.
pub async fn history(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let names = ExerciseRepo::distinct_names(&state.pool, auth_user.user_id, HISTORY_LIMIT).await?;
    Ok(Json(DataResponse { data: names }))
}

/// PATCH /api/v1/exercises/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExercise>,
) -> AppResult<Json<Exercise>> {
    if let Some(name) = &input.exercise_name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Exercise name must not be empty".into(),
            )));
        }
    }

    let exercise = ExerciseRepo::update(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;

    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/{id}
///
/// Cascades to the exercise's sets. Sibling exercises keep their order
/// values; gaps are legal.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExerciseRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }));
    }

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/exercises/{id}/sets
///
/// Append a set at the next order position. Omitted weight/reps/rpe default
/// from the previous set of the same exercise.
pub async fn add_set(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSet>,
) -> AppResult<(StatusCode, Json<WorkoutSet>)> {
    validate_set_numbers(input.weight, input.reps, input.rpe)?;

    let set = SetRepo::create_with_next_order(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok((StatusCode::CREATED, Json(set)))
}

/// Shared bounds check for set numbers on create and update paths.
pub(crate) fn validate_set_numbers(
    weight: Option<f64>,
    reps: Option<i32>,
    rpe: Option<f64>,
) -> AppResult<()> {
    if weight.is_some_and(|w| w < 0.0 || !w.is_finite()) {
        return Err(AppError::Core(CoreError::Validation(
            "Weight must be a non-negative number".into(),
        )));
    }
    if reps.is_some_and(|r| r < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Reps must not be negative".into(),
        )));
    }
    if rpe.is_some_and(|r| !(0.0..=10.0).contains(&r)) {
        return Err(AppError::Core(CoreError::Validation(
            "RPE must be between 0 and 10".into(),
        )));
    }
    Ok(())
}
