//! Handlers for the `/tools` endpoints: stateless training arithmetic.

use axum::extract::Query;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::tools::{estimate_one_rep_max, plates_per_side, PlateBreakdown};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Default bar weight in pounds.
const DEFAULT_BAR_WEIGHT: f64 = 45.0;

/// Query parameters for `GET /tools/one-rep-max`.
#[derive(Debug, Deserialize)]
pub struct OneRepMaxQuery {
    pub weight: f64,
    pub reps: u32,
}

/// Response body for `GET /tools/one-rep-max`.
#[derive(Debug, Serialize)]
pub struct OneRepMaxResponse {
    pub weight: f64,
    pub reps: u32,
    pub estimated_one_rep_max: f64,
}

/// Query parameters for `GET /tools/plates`.
#[derive(Debug, Deserialize)]
pub struct PlatesQuery {
    pub target: f64,
    pub bar: Option<f64>,
}

/// Response body for `GET /tools/plates`.
#[derive(Debug, Serialize)]
pub struct PlatesResponse {
    pub target: f64,
    pub bar: f64,
    #[serde(flatten)]
    pub breakdown: PlateBreakdown,
}

/// GET /api/v1/tools/one-rep-max
pub async fn one_rep_max(
    _auth_user: AuthUser,
    Query(query): Query<OneRepMaxQuery>,
) -> AppResult<Json<OneRepMaxResponse>> {
    if query.weight < 0.0 || !query.weight.is_finite() {
        return Err(AppError::Core(CoreError::Validation(
            "Weight must be a non-negative number".into(),
        )));
    }

    Ok(Json(OneRepMaxResponse {
        weight: query.weight,
        reps: query.reps,
        estimated_one_rep_max: estimate_one_rep_max(query.weight, query.reps),
    }))
}

/// GET /api/v1/tools/plates
pub async fn plates(
    _auth_user: AuthUser,
    Query(query): Query<PlatesQuery>,
) -> AppResult<Json<PlatesResponse>> {
    let bar = query.bar.unwrap_or(DEFAULT_BAR_WEIGHT);
    if query.target < 0.0 || bar <= 0.0 || !query.target.is_finite() || !bar.is_finite() {
        return Err(AppError::Core(CoreError::Validation(
            "Target and bar weights must be non-negative numbers".into(),
        )));
    }

    Ok(Json(PlatesResponse {
        target: query.target,
        bar,
        breakdown: plates_per_side(query.target, bar),
    }))
}
