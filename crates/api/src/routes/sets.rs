//! Route definitions for the `/sets` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::sets;
use crate::state::AppState;

/// Routes mounted at `/sets`.
///
/// ```text
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", patch(sets::update).delete(sets::delete))
}
