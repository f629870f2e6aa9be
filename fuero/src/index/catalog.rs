use std::sync::Arc;

use parking_lot::RwLock;

use crate::embeddings::TextEncoder;
use crate::error::{FueroError, Result};
use crate::models::RulingRecord;

use super::VectorIndex;

/// In-memory collection of ingested rulings and the vector index over them.
///
/// Single source of truth for ruling metadata: index row i always refers to
/// the i-th record in insertion order, and the index holds exactly one row
/// per record after every ingestion. Records are append-only, so a stale
/// index snapshot still resolves to valid positions.
pub struct RulingCatalog {
    encoder: Arc<dyn TextEncoder>,
    records: RwLock<Vec<RulingRecord>>,
    index: VectorIndex,
}

impl RulingCatalog {
    pub fn new(encoder: Arc<dyn TextEncoder>) -> Self {
        Self {
            encoder,
            records: RwLock::new(Vec::new()),
            index: VectorIndex::new(),
        }
    }

    /// Encodes `full_text`, appends the record, and republishes the index.
    ///
    /// O(n) in the number of already-ingested rulings: the index is rebuilt
    /// from scratch. Callers ingesting a large batch should prefer one
    /// rebuild over n, but at the expected corpus size (thousands) per-add
    /// rebuilds are fine.
    pub async fn add(
        &self,
        title: String,
        full_text: String,
        topic: String,
        court: String,
        date: String,
    ) -> Result<()> {
        if title.trim().is_empty() {
            return Err(FueroError::Validation(
                "el título del fallo no puede estar vacío".to_string(),
            ));
        }

        let embedding = self.encoder.encode(&full_text).await?;

        let mut records = self.records.write();
        records.push(RulingRecord {
            title,
            full_text,
            topic,
            court,
            date,
            embedding,
        });
        let vectors = records.iter().map(|r| r.embedding.clone()).collect();
        self.index.rebuild(vectors);
        Ok(())
    }

    /// Direct positional lookup into the catalog.
    pub fn get(&self, position: usize) -> Result<RulingRecord> {
        let records = self.records.read();
        records
            .get(position)
            .cloned()
            .ok_or(FueroError::OutOfRange {
                position,
                len: records.len(),
            })
    }

    /// Nearest neighbors of `vector` as (catalog position, distance) pairs.
    pub fn search(&self, vector: &[f32], k: usize) -> Vec<(usize, f32)> {
        self.index.query(vector, k)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
