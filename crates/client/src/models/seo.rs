//! SEO metadata models.
//!
//! The backend exposes SEO data in two forms: a pre-structured
//! `yoast_head_json` object, or a raw `yoast_head` HTML fragment that has
//! to be scraped (see [`crate::scrape`]). Both deserialize into
//! [`SeoMetadata`].

use serde::{Deserialize, Serialize};

/// Search/social preview metadata for a page or post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub og_type: Option<String>,
    #[serde(default)]
    pub og_url: Option<String>,
    #[serde(default)]
    pub twitter_card: Option<String>,
    #[serde(default)]
    pub twitter_title: Option<String>,
    #[serde(default)]
    pub twitter_description: Option<String>,
    #[serde(default)]
    pub twitter_image: Option<String>,
    #[serde(default)]
    pub robots: Option<Robots>,
}

/// Robots directives; only the index/follow pair is tracked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Robots {
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub follow: Option<String>,
}

/// SEO-bearing fields of a page or post response, used when resolving SEO
/// metadata by slug.
#[derive(Debug, Deserialize)]
pub struct SeoSource {
    #[serde(default)]
    pub yoast_head_json: Option<SeoMetadata>,
    #[serde(default)]
    pub yoast_head: Option<String>,
}

/// Which collection a slug is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Pages,
    Posts,
}

impl ContentType {
    /// REST collection route for this content type.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Posts => "posts",
        }
    }
}
