//! Handlers for the `/sets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::set::{UpdateSet, WorkoutSet};
use ironlog_db::repositories::SetRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::exercises::validate_set_numbers;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// PATCH /api/v1/sets/{id}
///
/// Patch semantics: only the provided fields change. The resulting row is
/// validated before anything is written; a set may never end up with both
/// weight and reps at zero.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSet>,
) -> AppResult<Json<WorkoutSet>> {
    validate_set_numbers(input.weight, input.reps, input.rpe)?;

    let current = SetRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Set", id }))?;

    let new_weight = input.weight.unwrap_or(current.weight);
    let new_reps = input.reps.unwrap_or(current.reps);
    if new_weight == 0.0 && new_reps == 0 {
        return Err(AppError::Core(CoreError::Validation(
            "A set must have a weight or at least one rep".into(),
        )));
    }

    let set = SetRepo::update(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Set", id }))?;

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(Json(set))
}

/// DELETE /api/v1/sets/{id}
///
/// Sibling sets keep their order values; gaps are legal.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SetRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Set", id }));
    }

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(StatusCode::NO_CONTENT)
}
