//! Route definitions for the `/workouts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workouts;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET    /                 -> list (?limit)
/// POST   /                 -> create
/// GET    /grouped          -> grouped
/// GET    /{id}             -> get_by_id
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/finish      -> finish
/// POST   /{id}/exercises   -> add_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workouts::list).post(workouts::create))
        .route("/grouped", get(workouts::grouped))
        .route(
            "/{id}",
            get(workouts::get_by_id)
                .patch(workouts::update)
                .delete(workouts::delete),
        )
        .route("/{id}/finish", post(workouts::finish))
        .route("/{id}/exercises", post(workouts::add_exercise))
}
