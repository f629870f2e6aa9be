//! v1 ruling handlers: catalog ingestion and the dual-path search.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::v1::dto::{IngestRulingRequest, IngestRulingResponse, SearchRulingsRequest};
use crate::api::v1::response::{ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::CombinedSearch;
use crate::services::DEFAULT_TOP_K;

/// `POST /api/v1/rulings`
///
/// Ingests one ruling: encodes its text, appends it to the catalog and
/// republishes the vector index.
pub async fn ingest_ruling(
    State(state): State<AppState>,
    Json(req): Json<IngestRulingRequest>,
) -> ApiResponse<IngestRulingResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state
        .catalog
        .add(req.title, req.full_text, req.topic, req.court, req.date)
        .await
    {
        Ok(()) => ApiResponse::created(IngestRulingResponse {
            total: state.catalog.len(),
        }),
        Err(e) => ApiResponse::from(e),
    }
}

/// `POST /api/v1/rulings/search`
///
/// Runs both retrieval paths and applies the combined policy: portal
/// results win when the scrape found real linked entries, semantic results
/// otherwise. A portal outage degrades to the connection-error sentinel in
/// the scraped list; it never fails the request.
pub async fn search_rulings(
    State(state): State<AppState>,
    Json(req): Json<SearchRulingsRequest>,
) -> ApiResponse<CombinedSearch> {
    if req.consulta.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "La consulta está vacía");
    }
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    let top_k = req.top_k.unwrap_or(DEFAULT_TOP_K);
    match state
        .jurisprudence
        .search_combined(&req.consulta, top_k, req.tema.as_deref())
        .await
    {
        Ok(combined) => ApiResponse::success(combined),
        Err(e) => ApiResponse::from(e),
    }
}
