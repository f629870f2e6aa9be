use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analyzed case as persisted by the memory store.
///
/// `id` and `created_at` are store-assigned. `related_rulings` is an opaque
/// JSON array round-tripped verbatim; the store never inspects its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: i64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "texto")]
    pub source_text: String,
    #[serde(rename = "resultado")]
    pub result_summary: String,
    #[serde(rename = "fallos_relacionados")]
    pub related_rulings: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
