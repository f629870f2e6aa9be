use std::sync::Arc;

use crate::embeddings::TextEncoder;
use crate::error::Result;
use crate::index::RulingCatalog;
use crate::models::{CombinedSearch, RulingMatch, RulingRef, ScrapeOutcome, SearchSource};
use crate::scraper::{extract_title_matches, PortalClient};

/// Length of the text preview returned on semantic hits, in characters.
const PREVIEW_CHARS: usize = 300;

pub const DEFAULT_TOP_K: usize = 5;

/// Orchestrates the two retrieval paths (portal scraping and semantic
/// nearest-neighbor over the local catalog) plus the combined policy.
pub struct JurisprudenceService {
    portal: PortalClient,
    catalog: Arc<RulingCatalog>,
    encoder: Arc<dyn TextEncoder>,
}

impl JurisprudenceService {
    pub fn new(
        portal: PortalClient,
        catalog: Arc<RulingCatalog>,
        encoder: Arc<dyn TextEncoder>,
    ) -> Self {
        Self {
            portal,
            catalog,
            encoder,
        }
    }

    /// Scrape path. Never fails: portal errors degrade to
    /// [`ScrapeOutcome::ConnectionFailed`] so "the portal is down" needs no
    /// error handling in callers.
    pub async fn search_scraped(&self, keyword: &str) -> ScrapeOutcome {
        let html = match self.portal.fetch_page().await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    portal = %self.portal.base_url(),
                    "Portal fetch failed, degrading to connection-error outcome"
                );
                return ScrapeOutcome::ConnectionFailed;
            }
        };

        let entries = extract_title_matches(&html, self.portal.base_url(), keyword);
        if entries.is_empty() {
            tracing::info!(keyword, "No scraped rulings matched");
        }
        ScrapeOutcome::from_entries(entries)
    }

    /// Semantic path over the local catalog.
    ///
    /// A topic filter drops non-matching neighbors after retrieval, so the
    /// result may hold fewer than `top_k` entries even when the index had
    /// enough. An empty catalog yields an empty result, not an error.
    pub async fn search_semantic(
        &self,
        query: &str,
        top_k: usize,
        topic_filter: Option<&str>,
    ) -> Result<Vec<RulingMatch>> {
        if self.catalog.is_empty() {
            return Ok(Vec::new());
        }

        let vector = self.encoder.encode(query).await?;
        let neighbors = self.catalog.search(&vector, top_k);

        let mut matches = Vec::with_capacity(neighbors.len());
        for (position, distance) in neighbors {
            let record = self.catalog.get(position)?;
            if let Some(topic) = topic_filter {
                if record.topic != topic {
                    continue;
                }
            }
            matches.push(RulingMatch {
                title: record.title,
                court: record.court,
                date: record.date,
                topic: record.topic,
                preview: preview(&record.full_text),
                distance,
            });
        }
        Ok(matches)
    }

    /// Combined policy: the scraped set wins iff the scrape yielded at
    /// least one real linked entry; otherwise the semantic set is used.
    pub async fn search_combined(
        &self,
        query: &str,
        top_k: usize,
        topic_filter: Option<&str>,
    ) -> Result<CombinedSearch> {
        let scraped = self.search_scraped(query).await;
        let semantic = self.search_semantic(query, top_k, topic_filter).await?;

        let (source, results) = match &scraped {
            ScrapeOutcome::Found(entries) => (
                SearchSource::Portal,
                entries.iter().cloned().map(RulingRef::Scraped).collect(),
            ),
            _ => (
                SearchSource::Semantica,
                semantic.iter().cloned().map(RulingRef::Semantic).collect(),
            ),
        };

        Ok(CombinedSearch {
            source,
            results,
            scraped: scraped.into_entries(),
            semantic,
        })
    }
}

/// First `PREVIEW_CHARS` characters plus an ellipsis marker; whole text when
/// it already fits. Cuts on character boundaries, never mid-codepoint.
fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
