use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

const BUSY_TIMEOUT_MS: u64 = 5000;

/// Embedded case-memory database. Local file or `:memory:`; the schema is
/// created idempotently on open, never destructively.
pub struct Database {
    db: Arc<libsql::Database>,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let database = Self { db: Arc::new(db) };
        database.configure_database().await?;
        database.init_schema().await?;

        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    async fn configure_database(&self) -> Result<()> {
        let conn = self.connect()?;

        for pragma in [
            format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"),
            "PRAGMA journal_mode = WAL".to_string(),
            "PRAGMA synchronous = NORMAL".to_string(),
        ] {
            if let Err(error) = conn.execute_batch(&pragma).await {
                tracing::warn!(pragma = %pragma, error = %error, "Failed to apply SQLite pragma");
            }
        }

        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await?;
        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}
