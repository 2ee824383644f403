//! Handlers for the `/workouts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ironlog_core::calendar;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::exercise::{CreateExercise, Exercise};
use ironlog_db::models::set::WorkoutSet;
use ironlog_db::models::workout::{CreateWorkout, UpdateWorkout, Workout, WorkoutSummary};
use ironlog_db::repositories::{ExerciseRepo, SetRepo, TemplateRepo, WorkoutRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Name used when a workout is started without one.
const DEFAULT_WORKOUT_NAME: &str = "Quick Workout";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /workouts`.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: Option<String>,
    pub template_id: Option<DbId>,
    pub notes: Option<String>,
}

/// Query parameters for `GET /workouts`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// One display bucket of `GET /workouts/grouped`.
#[derive(Debug, Serialize)]
pub struct WorkoutGroup {
    /// "This Week", "Last Week", "Earlier This Month", or "<Month> <Year>".
    pub label: String,
    pub workouts: Vec<WorkoutSummary>,
}

/// Full workout detail: the workout plus its ordered exercises and sets.
#[derive(Debug, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<ExerciseDetail>,
}

/// One exercise of a workout detail with its ordered sets.
#[derive(Debug, Serialize)]
pub struct ExerciseDetail {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/workouts
///
/// Start a workout, optionally seeded from one of the caller's templates.
/// A failed template copy leaves the (usable, empty) workout in place.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateWorkoutRequest>,
) -> AppResult<(StatusCode, Json<Workout>)> {
    let user_id = auth_user.user_id;

    if let Some(template_id) = input.template_id {
        TemplateRepo::find_by_id(&state.pool, user_id, template_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Template",
                id: template_id,
            }))?;
    }

    let name = input
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_WORKOUT_NAME.to_string());

    let workout = WorkoutRepo::create(
        &state.pool,
        &CreateWorkout {
            user_id,
            name,
            template_id: input.template_id,
            notes: input.notes,
        },
        Utc::now(),
    )
    .await?;

    if let Some(template_id) = input.template_id {
        match ExerciseRepo::copy_from_template(&state.pool, user_id, workout.id, template_id).await
        {
            Ok(copied) => {
                tracing::debug!(workout_id = workout.id, copied, "Template exercises copied");
            }
            Err(e) => {
                // The empty workout stays usable; the user can add exercises
                // manually.
                tracing::warn!(
                    workout_id = workout.id,
                    template_id,
                    error = %e,
                    "Template copy failed"
                );
            }
        }
    }

    state.stats_cache.invalidate(user_id).await;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts
///
/// The caller's workouts, newest first, annotated with exercise counts.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<WorkoutSummary>>>> {
    let workouts = WorkoutRepo::list_summaries(&state.pool, auth_user.user_id, query.limit).await?;
    Ok(Json(DataResponse { data: workouts }))
}

/// GET /api/v1/workouts/grouped
///
/// All workouts bucketed for display. Bucket labels are computed against the
/// current clock at call time, never stored.
pub async fn grouped(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<WorkoutGroup>>>> {
    let workouts = WorkoutRepo::list_summaries(&state.pool, auth_user.user_id, None).await?;
    let now = Utc::now();

    // Workouts arrive newest first, so buckets appear in display order.
    let mut groups: Vec<WorkoutGroup> = Vec::new();
    for workout in workouts {
        let label = calendar::period_label(workout.date.date_naive(), now);
        match groups.last_mut() {
            Some(group) if group.label == label => group.workouts.push(workout),
            _ => groups.push(WorkoutGroup {
                label,
                workouts: vec![workout],
            }),
        }
    }

    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/workouts/{id}
///
/// Full detail: the workout with its exercises in order and each exercise's
/// sets in order.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkoutDetail>> {
    let user_id = auth_user.user_id;

    let workout = WorkoutRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;

    let exercises = ExerciseRepo::list_by_workout(&state.pool, user_id, id).await?;
    let mut sets = SetRepo::list_by_workout(&state.pool, user_id, id).await?;

    // Both lists come back ordered, so the sets of each exercise form one
    // contiguous run.
    let exercises = exercises
        .into_iter()
        .map(|exercise| {
            let split = sets.partition_point(|s| s.exercise_id == exercise.id);
            let own_sets: Vec<WorkoutSet> = sets.drain(..split).collect();
            ExerciseDetail {
                exercise,
                sets: own_sets,
            }
        })
        .collect();

    Ok(Json(WorkoutDetail { workout, exercises }))
}

/// PATCH /api/v1/workouts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkout>,
) -> AppResult<Json<Workout>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Workout name must not be empty".into(),
            )));
        }
    }
    if let Some(duration) = input.duration {
        if duration < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Duration must not be negative".into(),
            )));
        }
    }

    let workout = WorkoutRepo::update(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(Json(workout))
}

/// DELETE /api/v1/workouts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WorkoutRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }));
    }

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/workouts/{id}/finish
///
/// Store the elapsed minutes computed from the workout's own start time.
/// Calling it again recomputes from the same start.
pub async fn finish(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Workout>> {
    let workout = WorkoutRepo::finish(&state.pool, auth_user.user_id, id, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok(Json(workout))
}

/// POST /api/v1/workouts/{id}/exercises
///
/// Append an exercise at the next order position.
pub async fn add_exercise(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateExercise>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    if input.exercise_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Exercise name must not be empty".into(),
        )));
    }

    let exercise = ExerciseRepo::create_with_next_order(&state.pool, auth_user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;

    state.stats_cache.invalidate(auth_user.user_id).await;
    Ok((StatusCode::CREATED, Json(exercise)))
}
