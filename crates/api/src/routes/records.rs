//! Route definitions for the `/records` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET / -> list (?exercise_name)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(records::list))
}
