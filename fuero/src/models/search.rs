use serde::{Deserialize, Serialize};

use super::ScrapedEntry;

/// One semantic hit resolved against the ruling catalog. Carries a bounded
/// text preview instead of the full ruling body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulingMatch {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "tribunal")]
    pub court: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "texto")]
    pub preview: String,
    #[serde(rename = "distancia")]
    pub distance: f32,
}

/// Which of the two retrieval paths won the combined policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Portal,
    Semantica,
}

/// A ruling reference in the combined ranked list. Scraped and semantic
/// entries keep their own wire shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RulingRef {
    Scraped(ScrapedEntry),
    Semantic(RulingMatch),
}

/// Combined search response: the preferred ranked list plus both raw lists,
/// so callers that want a single answer and callers that want to show both
/// paths are served by one shape.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedSearch {
    #[serde(rename = "fuente")]
    pub source: SearchSource,
    #[serde(rename = "fallos")]
    pub results: Vec<RulingRef>,
    #[serde(rename = "fallos_portal")]
    pub scraped: Vec<ScrapedEntry>,
    #[serde(rename = "fallos_semanticos")]
    pub semantic: Vec<RulingMatch>,
}

impl CombinedSearch {
    /// True when the scraped list is one of the sentinel shapes rather than
    /// real portal data.
    pub fn scraped_is_sentinel(&self) -> bool {
        self.scraped.len() == 1 && self.scraped[0].link.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_RESULTS_TITLE;

    #[test]
    fn sentinel_detection_matches_no_results_shape() {
        let combined = CombinedSearch {
            source: SearchSource::Semantica,
            results: Vec::new(),
            scraped: vec![ScrapedEntry {
                title: NO_RESULTS_TITLE.to_string(),
                link: None,
            }],
            semantic: Vec::new(),
        };
        assert!(combined.scraped_is_sentinel());
    }

    #[test]
    fn real_entries_are_not_sentinels() {
        let combined = CombinedSearch {
            source: SearchSource::Portal,
            results: Vec::new(),
            scraped: vec![ScrapedEntry {
                title: "Aquino c/ Cargo Servicios".to_string(),
                link: Some("http://portal/aquino".to_string()),
            }],
            semantic: Vec::new(),
        };
        assert!(!combined.scraped_is_sentinel());
    }
}
