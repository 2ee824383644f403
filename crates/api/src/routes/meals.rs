//! Route definitions for the `/meals` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::meals;
use crate::state::AppState;

/// Routes mounted at `/meals`.
///
/// ```text
/// GET  /          -> list (?limit)
/// POST /          -> create_manual
/// POST /analyze   -> analyze
/// GET  /today     -> today
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meals::list).post(meals::create_manual))
        .route("/analyze", post(meals::analyze))
        .route("/today", get(meals::today))
}
