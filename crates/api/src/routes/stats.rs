//! Route definitions for the `/stats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET /summary   -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(stats::summary))
}
