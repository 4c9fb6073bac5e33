//! REST API endpoint implementations.
//!
//! Free async functions over a shared `reqwest::Client`; each performs a
//! single request and returns a typed [`Result`]. Converting errors into
//! the gateway defaults happens one layer up, in [`crate::client`].

mod media;
mod menus;
mod pages;
mod posts;
mod reviews;
mod seo;
mod site;

pub use media::get_media;
pub use menus::get_menu;
pub use pages::{get_page_by_slug, list_pages};
pub use posts::{get_post_by_slug, list_posts};
pub use reviews::{get_review_widget, list_testimonials};
pub use seo::get_seo_source;
pub use site::get_site_info;

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};
use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};

/// Characters percent-encoded in URL path segments, per RFC 3986 plus the
/// characters that would break path interpretation (`/`, `%`, `?`, `#`).
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#');

/// Percent-encode a caller-provided value interpolated into a URL path.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Send a request and map any non-2xx status to [`ClientError::ApiError`].
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    Ok(response)
}
