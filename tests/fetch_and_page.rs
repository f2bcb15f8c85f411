//! End-to-end tests for the fetch → paginate → display pipeline.
//!
//! Each test stands up its own wiremock server and drives the public API
//! the way a render pass does: fetch the feed, page it with a cursor, and
//! inspect the display records.

use newsdesk::feed::{self, FetchError, DEFAULT_TIMEOUT};
use newsdesk::pagination::Cursor;
use newsdesk::view;
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// RSS 2.0 body with `n` items; odd-numbered items omit the description.
fn rss_body(n: usize) -> String {
    let mut body = String::from(r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Testing News</title>"#);
    for i in 0..n {
        body.push_str(&format!(
            "<item><title>Headline {i}</title><link>https://example.com/{i}</link>\
             <pubDate>Mon, 02 Jan 2023 15:04:05 GMT</pubDate>{}</item>",
            if i % 2 == 0 {
                format!("<description>&lt;p&gt;Summary {i}&lt;/p&gt;</description>")
            } else {
                String::new()
            }
        ));
    }
    body.push_str("</channel></rss>");
    body
}

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("Content-Type", "application/rss+xml"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_returns_entries_in_feed_order() {
    let server = serve(&rss_body(45)).await;
    let client = reqwest::Client::new();

    let entries = feed::fetch(&client, &server.uri(), "software testing", DEFAULT_TIMEOUT)
        .await
        .unwrap();

    assert_eq!(entries.len(), 45);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.title, format!("Headline {i}"));
        assert_eq!(entry.link, format!("https://example.com/{i}"));
    }
}

#[tokio::test]
async fn test_query_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Software Testing AI News"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    feed::fetch(&client, &server.uri(), "Software Testing AI News", DEFAULT_TIMEOUT)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_client_identifier_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("User-Agent", newsdesk::app::USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .user_agent(newsdesk::app::USER_AGENT)
        .build()
        .unwrap();
    feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_load_more_scenario_45_entries() {
    let server = serve(&rss_body(45)).await;
    let client = reqwest::Client::new();
    let entries = feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
        .await
        .unwrap();

    // First render: 20 of 45, load more available
    let cursor = Cursor::default();
    let (cards, summary) = view::page(&entries, cursor);
    assert_eq!(cards.len(), 20);
    assert_eq!((summary.shown, summary.total), (20, 45));
    assert!(summary.has_more());

    // One "load more": 40 of 45
    let cursor = cursor.advance();
    let (cards, summary) = view::page(&entries, cursor);
    assert_eq!(cards.len(), 40);
    assert_eq!((summary.shown, summary.total), (40, 45));
    assert!(summary.has_more());

    // Second "load more": clamped to 45, control disappears
    let cursor = cursor.advance();
    let (cards, summary) = view::page(&entries, cursor);
    assert_eq!(cards.len(), 45);
    assert_eq!((summary.shown, summary.total), (45, 45));
    assert!(!summary.has_more());
}

#[tokio::test]
async fn test_cards_carry_formatted_date_and_optional_description() {
    let server = serve(&rss_body(4)).await;
    let client = reqwest::Client::new();
    let entries = feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
        .await
        .unwrap();

    let (cards, _) = view::page(&entries, Cursor::default());

    assert_eq!(cards[0].date.as_deref(), Some("January 02, 2023"));
    assert_eq!(cards[0].description.as_deref(), Some("Summary 0"));
    // Odd items have no description block at all
    assert_eq!(cards[1].description, None);
}

#[tokio::test]
async fn test_http_failure_is_an_error_not_an_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1) // exactly one request: no retry, no backoff
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let err = feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus(503)));
}

#[tokio::test]
async fn test_empty_feed_distinct_from_failure() {
    let server = serve(&rss_body(0)).await;
    let client = reqwest::Client::new();

    let entries = feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
        .await
        .unwrap();
    assert!(entries.is_empty(), "zero items is a success, not an error");

    let (cards, summary) = view::page(&entries, Cursor::default());
    assert!(cards.is_empty());
    assert_eq!((summary.shown, summary.total), (0, 0));
}

#[tokio::test]
async fn test_repeated_fetch_is_stateless() {
    // No caching: every render pass hits the network again
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss_body(3)))
        .expect(3)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let entries = feed::fetch(&client, &server.uri(), "q", DEFAULT_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
    }
}
