use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/v1/analysis/contract`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContractInput {
    #[serde(rename = "texto")]
    #[validate(length(max = 100_000, message = "el texto del contrato es demasiado largo"))]
    pub text: String,
}

/// Body of `POST /api/v1/analysis/conflict`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConflictInput {
    #[serde(rename = "descripcion")]
    #[validate(length(max = 100_000, message = "la descripción del conflicto es demasiado larga"))]
    pub description: String,
}

/// Body of `POST /api/v1/analysis`: uncategorized text, classified by
/// keyword presence before analysis.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalysisInput {
    #[serde(rename = "texto")]
    #[validate(length(max = 100_000, message = "el texto es demasiado largo"))]
    pub text: String,
}
