//! Scraper boundary tests against a mock portal.

mod common;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fuero::models::{ScrapeOutcome, CONNECTION_ERROR_TITLE, NO_RESULTS_TITLE};
use fuero::scraper::PortalClient;

const PORTAL_HTML: &str = r#"
<html>
  <body>
    <ul>
      <li><a href="/fallos/2004-aquino">Aquino - accidente de trabajo</a></li>
      <li><a href="/fallos/2010-despido-1">Despido sin causa - Sala II</a></li>
      <li><a href="/fallos/2010-despido-1">Despido sin causa - Sala II</a></li>
      <li><a href="/fallos/2015-despido-2">Reclamo por DESPIDO indirecto</a></li>
      <li><a>Despido sin href</a></li>
    </ul>
  </body>
</html>
"#;

#[tokio::test]
async fn fetch_page_sends_the_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(&common::portal_config(&server.uri())).expect("client");
    let html = client.fetch_page().await.expect("fetch");
    assert_eq!(html, "<html></html>");
}

#[tokio::test]
async fn scrape_finds_deduplicated_matches_with_absolute_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PORTAL_HTML))
        .mount(&server)
        .await;

    let (service, _catalog) = common::jurisprudence(&server.uri());
    let outcome = service.search_scraped("despido").await;

    let entries = match outcome {
        ScrapeOutcome::Found(entries) => entries,
        other => panic!("expected Found, got {other:?}"),
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Despido sin causa - Sala II");
    assert_eq!(
        entries[0].link.as_deref(),
        Some(format!("{}/fallos/2010-despido-1", server.uri()).as_str())
    );
    assert_eq!(entries[1].title, "Reclamo por DESPIDO indirecto");
}

#[tokio::test]
async fn scrape_without_matches_degrades_to_the_no_results_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PORTAL_HTML))
        .mount(&server)
        .await;

    let (service, _catalog) = common::jurisprudence(&server.uri());
    let outcome = service.search_scraped("inexistente").await;
    assert_eq!(outcome, ScrapeOutcome::Empty);

    let wire = serde_json::to_value(outcome.into_entries()).expect("serialize");
    assert_eq!(
        wire,
        serde_json::json!([{ "titulo": NO_RESULTS_TITLE, "link": null }])
    );
}

#[tokio::test]
async fn server_errors_degrade_to_the_connection_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (service, _catalog) = common::jurisprudence(&server.uri());
    let outcome = service.search_scraped("despido").await;
    assert_eq!(outcome, ScrapeOutcome::ConnectionFailed);
}

#[tokio::test]
async fn network_failures_degrade_to_the_connection_sentinel_and_do_not_fail() {
    let (service, _catalog) = common::jurisprudence(common::UNREACHABLE_PORTAL);
    let outcome = service.search_scraped("despido").await;

    let wire = serde_json::to_value(outcome.into_entries()).expect("serialize");
    assert_eq!(
        wire,
        serde_json::json!([{ "titulo": CONNECTION_ERROR_TITLE, "link": null }])
    );
}
