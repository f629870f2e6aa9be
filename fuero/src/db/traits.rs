use async_trait::async_trait;

use crate::error::Result;
use crate::models::CaseRecord;

/// Append-only persistence for analyzed cases.
///
/// Entries are never mutated or deleted; `id` and `created_at` are assigned
/// by the store at insertion time.
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Persists a new case and returns it as stored. Persistence failures
    /// surface as errors; an analysis must never appear to succeed without
    /// its record being durable.
    async fn append(
        &self,
        kind: &str,
        source_text: &str,
        result_summary: &str,
        related_rulings: &serde_json::Value,
    ) -> Result<CaseRecord>;

    /// All cases whose `source_text` contains `needle` as a case-sensitive
    /// substring, in storage order. An empty result is a valid outcome.
    async fn find_similar(&self, needle: &str) -> Result<Vec<CaseRecord>>;

    /// Most recent cases, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<CaseRecord>>;
}
