//! Common test utilities for integration tests.
//!
//! All integration tests build their gateway clients through these
//! helpers so that the API-root and site-root URLs stay consistent with
//! how the mock server routes are mounted.

// Re-export test utilities from wp-client
#[allow(unused_imports)]
pub use wp_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
#[allow(unused_imports)]
pub use wp_client::{WpClient, endpoints};

/// API root path under which the mock WordPress REST API is mounted.
#[allow(dead_code)]
pub const API_PATH: &str = "/wp-json/wp/v2";

/// Build a gateway client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(mock_server: &MockServer) -> WpClient {
    WpClient::builder()
        .api_url(format!("{}{}", mock_server.uri(), API_PATH))
        .base_url(mock_server.uri())
        .build()
        .expect("test client should build")
}

/// Build a gateway client pointed at an address nothing listens on, to
/// exercise transport-level failures.
#[allow(dead_code)]
pub fn unreachable_client() -> WpClient {
    WpClient::builder()
        .api_url(format!("http://127.0.0.1:9{}", API_PATH))
        .base_url("http://127.0.0.1:9".to_string())
        .build()
        .expect("test client should build")
}
