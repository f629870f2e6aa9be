use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use crate::models::ScrapedEntry;

/// Extracts portal entries whose anchor text matches `query`.
///
/// Parses every `<a href=...>` in the document, resolves each href to an
/// absolute URL against `base`, keeps anchors whose visible text contains
/// `query` case-insensitively, and deduplicates by exact title text
/// preserving first-seen order. Returns an empty vec when nothing matches;
/// the caller decides how to represent that.
pub fn extract_title_matches(html: &str, base: &Url, query: &str) -> Vec<ScrapedEntry> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector");
    let needle = query.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for anchor in document.select(&anchors) {
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() || !title.to_lowercase().contains(&needle) {
            continue;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(link) = base.join(href) else {
            continue;
        };

        if seen.insert(title.clone()) {
            entries.push(ScrapedEntry {
                title,
                link: Some(link.to_string()),
            });
        }
    }

    entries
}
