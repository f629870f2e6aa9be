//! v1 analysis handlers.
//!
//! `POST /api/v1/analysis` classifies the text first; the `/contract` and
//! `/conflict` variants skip classification. Every analysis is recorded in
//! the case memory before the response is produced.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::v1::dto::{AnalysisInput, ConflictInput, ContractInput};
use crate::api::v1::response::{ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::AnalysisOutcome;

/// `POST /api/v1/analysis`
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisInput>,
) -> ApiResponse<AnalysisOutcome> {
    if req.text.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "El texto está vacío");
    }
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state.analysis.analyze(&req.text).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::from(e),
    }
}

/// `POST /api/v1/analysis/contract`
pub async fn analyze_contract(
    State(state): State<AppState>,
    Json(req): Json<ContractInput>,
) -> ApiResponse<AnalysisOutcome> {
    if req.text.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "El texto del contrato está vacío");
    }
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state.analysis.analyze_contract(&req.text).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::from(e),
    }
}

/// `POST /api/v1/analysis/conflict`
pub async fn analyze_conflict(
    State(state): State<AppState>,
    Json(req): Json<ConflictInput>,
) -> ApiResponse<AnalysisOutcome> {
    if req.description.trim().is_empty() {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "La descripción del conflicto está vacía",
        );
    }
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state.analysis.analyze_conflict(&req.description).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::from(e),
    }
}
