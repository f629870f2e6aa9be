use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CaseRecord, ScrapedEntry};

/// Coarse classification of an incoming text, decided by keyword presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseCategory {
    #[serde(rename = "contrato")]
    Contrato,
    #[serde(rename = "conflicto")]
    Conflicto,
    #[serde(rename = "presentacion-judicial")]
    PresentacionJudicial,
}

impl CaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseCategory::Contrato => "contrato",
            CaseCategory::Conflicto => "conflicto",
            CaseCategory::PresentacionJudicial => "presentacion-judicial",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templated legal report. Content is fixed per category; no inference is
/// performed over the submitted text beyond classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalReport {
    pub resultado: String,
    pub normativa: Vec<String>,
    pub jurisprudencia: String,
    pub clasificacion: String,
    pub riesgos: String,
    pub recomendaciones: String,
}

/// Full result of one analysis request: the report, the rulings retrieved
/// for it, prior similar cases, and the id of the durable record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    #[serde(rename = "categoria")]
    pub category: CaseCategory,
    #[serde(rename = "informe")]
    pub report: LegalReport,
    #[serde(rename = "fallos_relacionados")]
    pub related_rulings: Vec<ScrapedEntry>,
    #[serde(rename = "casos_previos")]
    pub similar_cases: Vec<CaseRecord>,
    #[serde(rename = "caso_id")]
    pub case_id: i64,
}
