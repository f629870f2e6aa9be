use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Analyzed cases, append-only
        CREATE TABLE IF NOT EXISTS cases (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            source_text TEXT NOT NULL,
            result_summary TEXT NOT NULL,
            related_rulings TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_cases_kind ON cases(kind);
        CREATE INDEX IF NOT EXISTS idx_cases_created_at ON cases(created_at);
        "#,
    )
    .await?;

    Ok(())
}
