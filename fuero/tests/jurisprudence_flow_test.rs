//! End-to-end retrieval flows: semantic search, topic filtering and the
//! combined fallback policy.

mod common;

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use fuero::embeddings::TextEncoder;
use fuero::index::RulingCatalog;
use fuero::models::{RulingRef, SearchSource, CONNECTION_ERROR_TITLE};

async fn seed(catalog: &RulingCatalog) {
    let rulings = [
        (
            "Fallo contrato a plazo",
            "Renovación sucesiva de contratos a plazo fijo sin causa objetiva.",
            "contrato",
        ),
        (
            "Fallo despido discriminatorio",
            "Despido dispuesto en represalia por la actividad sindical del trabajador.",
            "conflicto",
        ),
        (
            "Fallo horas extras",
            "Diferencias salariales por horas extras trabajadas y no abonadas.",
            "conflicto",
        ),
    ];
    for (title, text, topic) in rulings {
        catalog
            .add(
                title.to_string(),
                text.to_string(),
                topic.to_string(),
                "CNAT".to_string(),
                "2015-06-04".to_string(),
            )
            .await
            .expect("add ruling");
    }
}

#[tokio::test]
async fn stub_encoder_is_deterministic() {
    let encoder = common::StubEncoder;
    let a = encoder.encode("despido sin causa").await.expect("encode");
    let b = encoder.encode("despido sin causa").await.expect("encode");
    assert_eq!(a, b);
    assert_eq!(a.len(), encoder.dimensions());
}

#[tokio::test]
async fn semantic_search_on_an_empty_catalog_returns_nothing() {
    let (service, _catalog) = common::jurisprudence(common::UNREACHABLE_PORTAL);
    let matches = service
        .search_semantic("despido", 5, None)
        .await
        .expect("search");
    assert!(matches.is_empty());
}

#[tokio::test]
async fn topic_filter_drops_results_instead_of_replacing_them() {
    let (service, catalog) = common::jurisprudence(common::UNREACHABLE_PORTAL);
    seed(&catalog).await;

    let matches = service
        .search_semantic("despido", 3, Some("conflicto"))
        .await
        .expect("search");

    assert!(matches.len() <= 2);
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|m| m.topic == "conflicto"));
}

#[tokio::test]
async fn semantic_results_carry_bounded_previews_not_full_texts() {
    let (service, catalog) = common::jurisprudence(common::UNREACHABLE_PORTAL);
    let long_text = "jurisprudencia laboral ".repeat(40);
    catalog
        .add(
            "Fallo extenso".to_string(),
            long_text,
            "conflicto".to_string(),
            "CSJN".to_string(),
            "2004-09-21".to_string(),
        )
        .await
        .expect("add");

    let matches = service
        .search_semantic("jurisprudencia", 1, None)
        .await
        .expect("search");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].preview.chars().count(), 303);
    assert!(matches[0].preview.ends_with("..."));
}

#[tokio::test]
async fn combined_search_falls_back_to_semantic_when_the_portal_is_down() {
    let (service, catalog) = common::jurisprudence(common::UNREACHABLE_PORTAL);
    seed(&catalog).await;

    let combined = service
        .search_combined("despido", 3, None)
        .await
        .expect("combined");

    assert_eq!(combined.source, SearchSource::Semantica);
    assert!(combined
        .results
        .iter()
        .all(|r| matches!(r, RulingRef::Semantic(_))));
    // The scraped list still reports the outage through its sentinel shape.
    assert_eq!(combined.scraped.len(), 1);
    assert_eq!(combined.scraped[0].title, CONNECTION_ERROR_TITLE);
    assert!(combined.scraped_is_sentinel());
}

#[tokio::test]
async fn combined_search_prefers_real_scraped_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="/fallos/1">Despido sin causa - Sala II</a>"#,
        ))
        .mount(&server)
        .await;

    let (service, catalog) = common::jurisprudence(&server.uri());
    seed(&catalog).await;

    let combined = service
        .search_combined("despido", 3, None)
        .await
        .expect("combined");

    assert_eq!(combined.source, SearchSource::Portal);
    assert_eq!(combined.results.len(), 1);
    assert!(matches!(&combined.results[0], RulingRef::Scraped(entry)
        if entry.title == "Despido sin causa - Sala II" && entry.link.is_some()));
    // Both raw lists are still exposed.
    assert!(!combined.semantic.is_empty());
}
