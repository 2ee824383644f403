//! Route definitions for the `/tools` endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// GET /one-rep-max   -> one_rep_max (?weight&reps)
/// GET /plates        -> plates (?target&bar)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/one-rep-max", get(tools::one_rep_max))
        .route("/plates", get(tools::plates))
}
