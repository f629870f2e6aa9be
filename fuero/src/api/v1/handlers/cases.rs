//! v1 case-memory handler.

use axum::extract::{Query, State};

use crate::api::v1::dto::ListCasesQuery;
use crate::api::v1::response::ApiResponse;
use crate::api::AppState;
use crate::models::CaseRecord;

/// `GET /api/v1/cases`
///
/// Most recently stored cases, newest first.
pub async fn list_recent_cases(
    State(state): State<AppState>,
    Query(query): Query<ListCasesQuery>,
) -> ApiResponse<Vec<CaseRecord>> {
    match state.store.recent(query.clamped_limit()).await {
        Ok(cases) => ApiResponse::success(cases),
        Err(e) => ApiResponse::from(e),
    }
}
