//! Handlers for the `/meals` resource: manual logging, photo analysis, and
//! the daily macro totals.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ironlog_core::calendar;
use ironlog_core::error::CoreError;
use ironlog_db::models::meal::{CreateMeal, Meal};
use ironlog_db::repositories::MealRepo;
use ironlog_vision::Confidence;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of meals returned by the recent list.
const DEFAULT_MEAL_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /meals`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// Request body for `POST /meals` (manual entry).
#[derive(Debug, Deserialize)]
pub struct ManualMealRequest {
    pub food_items: Vec<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Request body for `POST /meals/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeMealRequest {
    /// Raw base64 JPEG payload, without a data-URL prefix.
    pub image_base64: String,
}

/// Response body for `GET /meals/today`.
#[derive(Debug, Serialize)]
pub struct TodaysMacros {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal_count: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/meals
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Meal>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_MEAL_LIMIT);
    let meals = MealRepo::list_recent(&state.pool, auth_user.user_id, limit).await?;
    Ok(Json(DataResponse { data: meals }))
}

/// POST /api/v1/meals
///
/// Log a meal the user typed in; confidence is always `manual`.
pub async fn create_manual(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ManualMealRequest>,
) -> AppResult<(StatusCode, Json<Meal>)> {
    if input.calories < 0 || input.protein < 0.0 || input.carbs < 0.0 || input.fats < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Nutrition values must not be negative".into(),
        )));
    }

    let meal = MealRepo::create(
        &state.pool,
        &CreateMeal {
            user_id: auth_user.user_id,
            food_items: input.food_items,
            calories: input.calories,
            protein: input.protein,
            carbs: input.carbs,
            fats: input.fats,
            confidence: Confidence::Manual.as_str().to_string(),
            analyzed_at: Utc::now(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(meal)))
}

/// POST /api/v1/meals/analyze
///
/// One outbound round trip to the vision collaborator, no retry. A meal row
/// is persisted only when the reply parses cleanly.
pub async fn analyze(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<AnalyzeMealRequest>,
) -> AppResult<(StatusCode, Json<Meal>)> {
    if input.image_base64.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "image_base64 must not be empty".into(),
        )));
    }

    let analysis = state.vision.analyze_photo(&input.image_base64).await?;

    let meal = MealRepo::create(
        &state.pool,
        &CreateMeal {
            user_id: auth_user.user_id,
            food_items: analysis.food_items,
            calories: analysis.calories.round() as i32,
            protein: analysis.protein,
            carbs: analysis.carbs,
            fats: analysis.fats,
            confidence: analysis.confidence.as_str().to_string(),
            analyzed_at: Utc::now(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(meal)))
}

/// GET /api/v1/meals/today
///
/// Macro totals over meals analyzed today (UTC midnight to midnight).
/// An empty day degrades to zeros.
pub async fn today(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<TodaysMacros>>> {
    let now = Utc::now();
    let rows = MealRepo::macro_rows_between(
        &state.pool,
        auth_user.user_id,
        calendar::day_start(now),
        calendar::next_day_start(now),
    )
    .await?;

    let totals = TodaysMacros {
        calories: rows.iter().map(|r| r.calories).sum(),
        protein: rows.iter().map(|r| r.protein).sum(),
        carbs: rows.iter().map(|r| r.carbs).sum(),
        fats: rows.iter().map(|r| r.fats).sum(),
        meal_count: rows.len(),
    };

    Ok(Json(DataResponse { data: totals }))
}
