//! Handlers for the `/templates` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::template::{CreateTemplate, TemplateExercise, WorkoutTemplate};
use ironlog_db::repositories::TemplateRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A template together with its ordered exercise list.
#[derive(Debug, Serialize)]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub template: WorkoutTemplate,
    pub exercises: Vec<TemplateExercise>,
}

/// GET /api/v1/templates
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<WorkoutTemplate>>>> {
    let templates = TemplateRepo::list(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// POST /api/v1/templates
///
/// Create a template with its exercise list in one request. Exercises
/// without an explicit order take their position in the submitted list.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateTemplate>,
) -> AppResult<(StatusCode, Json<TemplateDetail>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Template name must not be empty".into(),
        )));
    }
    if input
        .exercises
        .iter()
        .any(|e| e.exercise_name.trim().is_empty())
    {
        return Err(AppError::Core(CoreError::Validation(
            "Exercise names must not be empty".into(),
        )));
    }

    let template = TemplateRepo::create(&state.pool, auth_user.user_id, &input.name).await?;

    let mut exercises = Vec::with_capacity(input.exercises.len());
    for (position, exercise) in input.exercises.iter().enumerate() {
        let order = exercise.exercise_order.unwrap_or(position as i32);
        let row = TemplateRepo::add_exercise(&state.pool, template.id, order, exercise).await?;
        exercises.push(row);
    }

    Ok((
        StatusCode::CREATED,
        Json(TemplateDetail {
            template,
            exercises,
        }),
    ))
}

/// GET /api/v1/templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TemplateDetail>> {
    let template = TemplateRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;

    let exercises = TemplateRepo::list_exercises(&state.pool, auth_user.user_id, id).await?;

    Ok(Json(TemplateDetail {
        template,
        exercises,
    }))
}

/// DELETE /api/v1/templates/{id}
///
/// Removes the template and its exercise rows. Workouts created from it keep
/// their copied exercises; their `template_id` is cleared by the schema.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TemplateRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
