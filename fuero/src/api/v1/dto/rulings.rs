use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/v1/rulings`: ingest one ruling into the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IngestRulingRequest {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, message = "el título no puede estar vacío"))]
    pub title: String,
    #[serde(rename = "texto")]
    #[validate(length(min = 1, message = "el texto del fallo no puede estar vacío"))]
    pub full_text: String,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "tribunal")]
    pub court: String,
    #[serde(rename = "fecha")]
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestRulingResponse {
    /// Rulings held by the catalog after this ingestion.
    pub total: usize,
}

/// Body of `POST /api/v1/rulings/search`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRulingsRequest {
    #[validate(length(min = 1, message = "la consulta no puede estar vacía"))]
    pub consulta: String,
    pub top_k: Option<usize>,
    pub tema: Option<String>,
}
