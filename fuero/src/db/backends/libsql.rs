use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::CaseRepository;
use crate::db::traits::CaseStore;
use crate::error::Result;
use crate::models::CaseRecord;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CaseStore for LibSqlBackend {
    async fn append(
        &self,
        kind: &str,
        source_text: &str,
        result_summary: &str,
        related_rulings: &serde_json::Value,
    ) -> Result<CaseRecord> {
        let conn = self.db.connect()?;
        CaseRepository::insert(&conn, kind, source_text, result_summary, related_rulings).await
    }

    async fn find_similar(&self, needle: &str) -> Result<Vec<CaseRecord>> {
        let conn = self.db.connect()?;
        CaseRepository::find_similar(&conn, needle).await
    }

    async fn recent(&self, limit: u32) -> Result<Vec<CaseRecord>> {
        let conn = self.db.connect()?;
        CaseRepository::recent(&conn, limit).await
    }
}
