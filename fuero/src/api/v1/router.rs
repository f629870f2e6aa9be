use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let analysis = Router::new()
        .route("/", post(handlers::analysis::analyze))
        .route("/contract", post(handlers::analysis::analyze_contract))
        .route("/conflict", post(handlers::analysis::analyze_conflict));

    let rulings = Router::new()
        .route("/", post(handlers::rulings::ingest_ruling))
        .route("/search", post(handlers::rulings::search_rulings));

    let cases = Router::new().route("/", get(handlers::cases::list_recent_cases));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/analysis", analysis)
        .nest("/rulings", rulings)
        .nest("/cases", cases)
}
