//! Media resolution tests.
//!
//! # Invariants
//! - An absent or zero media reference resolves to `None` without any
//!   network traffic.
//! - A failed lookup or an attachment without a URL resolves to `None`.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn featured_image_resolves_to_source_url() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("media/get_media.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/media/101", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let url = test_client(&mock_server).featured_image_url(Some(101)).await;

    assert_eq!(
        url.as_deref(),
        Some("http://web.ruth/wp-content/uploads/2024/06/lodge.jpg")
    );
}

#[tokio::test]
async fn absent_media_reference_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.featured_image_url(None).await.is_none());
    assert!(client.featured_image_url(Some(0)).await.is_none());
}

#[tokio::test]
async fn missing_attachment_resolves_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/media/999", API_PATH)))
        .respond_with(ResponseTemplate::new(404).set_body_string("rest_post_invalid_id"))
        .mount(&mock_server)
        .await;

    let url = test_client(&mock_server).featured_image_url(Some(999)).await;

    assert!(url.is_none());
}

#[tokio::test]
async fn attachment_without_url_resolves_to_none() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("media/get_media_no_url.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/media/103", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let url = test_client(&mock_server).featured_image_url(Some(103)).await;

    assert!(url.is_none());
}

#[tokio::test]
async fn media_endpoint_parses_size_variants() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("media/get_media.json");

    Mock::given(method("GET"))
        .and(path(format!("{}/media/101", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let api_url = format!("{}{}", mock_server.uri(), API_PATH);
    let media = endpoints::get_media(&client, &api_url, 101).await.unwrap();

    assert_eq!(media.alt_text, "Vista del lodge desde el río");
    assert_eq!(media.media_details.sizes.len(), 3);
    assert_eq!(media.media_details.sizes["thumbnail"].width, 150);
}
