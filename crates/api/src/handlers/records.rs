//! Handler for the `/records` resource. Personal records are read-only here.

use axum::extract::{Query, State};
use axum::Json;
use ironlog_db::models::personal_record::PersonalRecord;
use ironlog_db::repositories::PersonalRecordRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /records`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub exercise_name: Option<String>,
}

/// GET /api/v1/records
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<PersonalRecord>>>> {
    let records = PersonalRecordRepo::list(
        &state.pool,
        auth_user.user_id,
        query.exercise_name.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: records }))
}
