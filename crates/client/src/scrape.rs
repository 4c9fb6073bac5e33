//! Best-effort SEO extraction from a raw HTML head fragment.
//!
//! The backend sometimes serves only a pre-rendered `yoast_head` string
//! instead of structured metadata. This module pulls the recognized tags
//! out of that fragment with sequential pattern extraction; it is not an
//! HTML parser and does not try to be one.
//!
//! Extraction rules:
//! - `<title>` and the canonical `<link>` are first-match-wins.
//! - Meta tags are scanned in document order; a later duplicate of a
//!   recognized name overwrites the earlier value.
//! - Unrecognized meta names are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Robots, SeoMetadata};

/// Pattern is a compile-time constant that is known to be valid.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").unwrap());

/// Matches `<meta name="…" content="…">` and the `property=` variant.
static META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta\s+(?:name|property)="([^"]+)"\s+content="([^"]+)""#).unwrap()
});

static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<link\s+rel="canonical"\s+href="([^"]+)""#).unwrap());

/// Extract SEO metadata from an HTML head fragment.
///
/// An empty or unrecognizable input yields a record with every field
/// unset; robots directives are only populated when a `robots` meta tag
/// was actually present.
pub fn parse_head(head: &str) -> SeoMetadata {
    let mut seo = SeoMetadata::default();

    if let Some(caps) = TITLE_RE.captures(head) {
        seo.title = Some(caps[1].to_string());
    }

    for caps in META_RE.captures_iter(head) {
        let content = caps[2].to_string();
        match &caps[1] {
            "description" => seo.description = Some(content),
            "og:title" => seo.og_title = Some(content),
            "og:description" => seo.og_description = Some(content),
            "og:image" => seo.og_image = Some(content),
            "og:type" => seo.og_type = Some(content),
            "og:url" => seo.og_url = Some(content),
            "twitter:card" => seo.twitter_card = Some(content),
            "twitter:title" => seo.twitter_title = Some(content),
            "twitter:description" => seo.twitter_description = Some(content),
            "twitter:image" => seo.twitter_image = Some(content),
            "robots" => seo.robots = Some(parse_robots(&content)),
            _ => {}
        }
    }

    if let Some(caps) = CANONICAL_RE.captures(head) {
        seo.canonical = Some(caps[1].to_string());
    }

    seo
}

/// Split a robots content attribute on commas; `noindex`/`nofollow`
/// tokens override the crawlable defaults.
fn parse_robots(content: &str) -> Robots {
    let directives: Vec<&str> = content.split(',').map(str::trim).collect();
    let index = if directives.contains(&"noindex") {
        "noindex"
    } else {
        "index"
    };
    let follow = if directives.contains(&"nofollow") {
        "nofollow"
    } else {
        "follow"
    };
    Robots {
        index: Some(index.to_string()),
        follow: Some(follow.to_string()),
    }
}
