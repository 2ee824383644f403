//! Route definitions for the `/exercises` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /history      -> history
/// PATCH  /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /{id}/sets    -> add_set
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(exercises::history))
        .route(
            "/{id}",
            patch(exercises::update).delete(exercises::delete),
        )
        .route("/{id}/sets", post(exercises::add_set))
}
