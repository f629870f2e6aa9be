use serde::{Deserialize, Serialize};

/// Sentinel title emitted when a scrape ran but matched nothing.
pub const NO_RESULTS_TITLE: &str = "Sin resultados";
/// Sentinel title emitted when the portal could not be reached.
pub const CONNECTION_ERROR_TITLE: &str = "Error de conexión";

/// A judicial ruling ingested into the local catalog.
///
/// Append-only: records are created at ingestion and never updated or
/// deleted. The embedding is computed once from `full_text` and is not
/// serialized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulingRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "texto")]
    pub full_text: String,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "tribunal")]
    pub court: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(skip)]
    pub embedding: Vec<f32>,
}

/// One entry scraped from the portal page. Ephemeral, produced per query.
///
/// `link` is `None` only on the sentinel entries produced by
/// [`ScrapeOutcome::into_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedEntry {
    #[serde(rename = "titulo")]
    pub title: String,
    pub link: Option<String>,
}

/// Result of one scrape pass against the portal.
///
/// `Found` always carries at least one entry; "no matches" and "portal
/// unreachable" are distinct variants rather than sentinel list entries, so
/// callers branch on the kind instead of string-matching a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Found(Vec<ScrapedEntry>),
    Empty,
    ConnectionFailed,
}

impl ScrapeOutcome {
    pub fn from_entries(entries: Vec<ScrapedEntry>) -> Self {
        if entries.is_empty() {
            ScrapeOutcome::Empty
        } else {
            ScrapeOutcome::Found(entries)
        }
    }

    /// True when the scrape yielded at least one real linked entry.
    pub fn found(&self) -> bool {
        matches!(self, ScrapeOutcome::Found(_))
    }

    /// Legacy wire shape expected by upstream consumers: `Empty` and
    /// `ConnectionFailed` become one-element sentinel lists with a null link.
    pub fn into_entries(self) -> Vec<ScrapedEntry> {
        match self {
            ScrapeOutcome::Found(entries) => entries,
            ScrapeOutcome::Empty => vec![ScrapedEntry {
                title: NO_RESULTS_TITLE.to_string(),
                link: None,
            }],
            ScrapeOutcome::ConnectionFailed => vec![ScrapedEntry {
                title: CONNECTION_ERROR_TITLE.to_string(),
                link: None,
            }],
        }
    }
}
