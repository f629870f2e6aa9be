#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use fuero::config::{DatabaseConfig, PortalConfig};
use fuero::db::{CaseStore, Database, LibSqlBackend};
use fuero::embeddings::TextEncoder;
use fuero::error::Result;
use fuero::index::RulingCatalog;
use fuero::scraper::PortalClient;
use fuero::services::JurisprudenceService;

/// Deterministic encoder for tests: no model download, the vector is a pure
/// function of the text.
pub struct StubEncoder;

#[async_trait]
impl TextEncoder for StubEncoder {
    async fn encode_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| encode_one(t)).collect())
    }

    fn dimensions(&self) -> usize {
        4
    }
}

pub fn encode_one(text: &str) -> Vec<f32> {
    let bytes = text.as_bytes();
    let sum: u64 = bytes.iter().map(|&b| b as u64).sum();
    vec![
        text.len() as f32,
        (sum % 101) as f32,
        bytes.first().copied().unwrap_or(0) as f32,
        bytes.last().copied().unwrap_or(0) as f32,
    ]
}

pub async fn memory_store() -> Arc<dyn CaseStore> {
    let db = Database::new(&DatabaseConfig {
        url: ":memory:".to_string(),
    })
    .await
    .expect("in-memory database");
    Arc::new(LibSqlBackend::new(db))
}

pub async fn file_store(path: &Path) -> Arc<dyn CaseStore> {
    let db = Database::new(&DatabaseConfig {
        url: path.to_string_lossy().into_owned(),
    })
    .await
    .expect("on-disk database");
    Arc::new(LibSqlBackend::new(db))
}

pub fn portal_config(base_url: &str) -> PortalConfig {
    PortalConfig {
        base_url: base_url.to_string(),
        user_agent: "Mozilla/5.0".to_string(),
        timeout_secs: 5,
    }
}

/// Jurisprudence service over a stub encoder and the given portal address.
pub fn jurisprudence(base_url: &str) -> (JurisprudenceService, Arc<RulingCatalog>) {
    let encoder: Arc<dyn TextEncoder> = Arc::new(StubEncoder);
    let catalog = Arc::new(RulingCatalog::new(encoder.clone()));
    let portal = PortalClient::new(&portal_config(base_url)).expect("portal client");
    let service = JurisprudenceService::new(portal, catalog.clone(), encoder);
    (service, catalog)
}

/// A portal address nothing listens on; connections are refused immediately.
pub const UNREACHABLE_PORTAL: &str = "http://127.0.0.1:1/";
