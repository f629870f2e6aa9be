use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::{FueroError, Result};
use crate::models::CaseRecord;

pub struct CaseRepository;

impl CaseRepository {
    pub async fn insert(
        conn: &Connection,
        kind: &str,
        source_text: &str,
        result_summary: &str,
        related_rulings: &serde_json::Value,
    ) -> Result<CaseRecord> {
        let created_at = Utc::now();
        let serialized = serde_json::to_string(related_rulings)?;

        conn.execute(
            r#"
            INSERT INTO cases (kind, source_text, result_summary, related_rulings, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                kind.to_string(),
                source_text.to_string(),
                result_summary.to_string(),
                serialized,
                created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(CaseRecord {
            id: conn.last_insert_rowid(),
            kind: kind.to_string(),
            source_text: source_text.to_string(),
            result_summary: result_summary.to_string(),
            related_rulings: related_rulings.clone(),
            created_at,
        })
    }

    /// Substring search over `source_text`, in storage order.
    ///
    /// Uses `instr` rather than `LIKE`: SQLite's `LIKE` is
    /// ASCII-case-insensitive and the documented contract is case-sensitive.
    pub async fn find_similar(conn: &Connection, needle: &str) -> Result<Vec<CaseRecord>> {
        let mut rows = conn
            .query(
                "SELECT id, kind, source_text, result_summary, related_rulings, created_at
                 FROM cases
                 WHERE instr(source_text, ?1) > 0
                 ORDER BY id ASC",
                params![needle.to_string()],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_case(&row)?);
        }
        Ok(results)
    }

    pub async fn recent(conn: &Connection, limit: u32) -> Result<Vec<CaseRecord>> {
        let mut rows = conn
            .query(
                "SELECT id, kind, source_text, result_summary, related_rulings, created_at
                 FROM cases
                 ORDER BY id DESC
                 LIMIT ?1",
                params![limit as i64],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_case(&row)?);
        }
        Ok(results)
    }

    fn row_to_case(row: &libsql::Row) -> Result<CaseRecord> {
        let id: i64 = row.get(0)?;
        let kind: String = row.get(1)?;
        let source_text: String = row.get(2)?;
        let result_summary: String = row.get(3)?;
        let related_raw: String = row.get(4)?;
        let created_raw: String = row.get(5)?;

        let related_rulings = serde_json::from_str(&related_raw)?;
        let created_at = DateTime::parse_from_rfc3339(&created_raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| FueroError::Internal(format!("invalid created_at '{created_raw}': {e}")))?;

        Ok(CaseRecord {
            id,
            kind,
            source_text,
            result_summary,
            related_rulings,
            created_at,
        })
    }
}
