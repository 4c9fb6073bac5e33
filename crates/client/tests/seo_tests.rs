//! SEO resolution tests.
//!
//! # Invariants
//! - Pre-structured `yoast_head_json` wins over the raw `yoast_head`
//!   fragment when both are present.
//! - A slug with no match, an item without SEO fields, or a failed call
//!   all resolve to `None`.

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};
use wp_client::ContentType;

#[tokio::test]
async fn seo_prefers_structured_metadata() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("seo/page_with_yoast_json.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/pages", API_PATH)))
        .and(query_param("slug", "nosotros"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("nosotros", ContentType::Pages)
        .await
        .expect("seo metadata should be present");

    // not the "Stale scraped title" from the yoast_head fragment
    assert_eq!(seo.title.as_deref(), Some("Nosotros - Ruth Amazon Expeditions"));
    assert_eq!(seo.canonical.as_deref(), Some("http://web.ruth/nosotros/"));
    assert_eq!(seo.og_type.as_deref(), Some("article"));
    let robots = seo.robots.expect("robots present");
    assert_eq!(robots.index.as_deref(), Some("index"));
    assert_eq!(robots.follow.as_deref(), Some("follow"));
}

#[tokio::test]
async fn seo_scrapes_head_fragment_when_no_structured_field() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("seo/page_with_yoast_head.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/pages", API_PATH)))
        .and(query_param("slug", "contacto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("contacto", ContentType::Pages)
        .await
        .expect("seo metadata should be scraped");

    assert_eq!(
        seo.title.as_deref(),
        Some("Contacto - Ruth Amazon Expeditions")
    );
    assert_eq!(
        seo.description.as_deref(),
        Some("Reserva tu expedición por la Amazonía")
    );
    assert_eq!(seo.og_title.as_deref(), Some("Contacto"));
    assert_eq!(seo.canonical.as_deref(), Some("http://web.ruth/contacto/"));
    let robots = seo.robots.expect("robots present");
    assert_eq!(robots.index.as_deref(), Some("noindex"));
    assert_eq!(robots.follow.as_deref(), Some("follow"));
}

#[tokio::test]
async fn seo_without_yoast_fields_is_none() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("seo/page_without_yoast.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/pages", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("galeria", ContentType::Pages)
        .await;

    assert!(seo.is_none());
}

#[tokio::test]
async fn seo_for_unknown_slug_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/posts", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("missing", ContentType::Posts)
        .await;

    assert!(seo.is_none());
}

#[tokio::test]
async fn seo_resolves_posts_against_the_posts_collection() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("seo/page_with_yoast_head.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/posts", API_PATH)))
        .and(query_param("slug", "contacto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("contacto", ContentType::Posts)
        .await;

    assert!(seo.is_some());
}

#[tokio::test]
async fn seo_degrades_to_none_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/pages", API_PATH)))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let seo = test_client(&mock_server)
        .seo("nosotros", ContentType::Pages)
        .await;

    assert!(seo.is_none());
}
