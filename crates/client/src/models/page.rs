//! Page models for the WordPress pages API.

use serde::{Deserialize, Serialize};

use super::common::Rendered;

/// A WordPress page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub title: Rendered,
    pub content: Rendered,
    pub slug: String,
    pub excerpt: Rendered,
    /// Media attachment id of the featured image; `0` means none.
    #[serde(default)]
    pub featured_media: Option<u64>,
    pub date: String,
    pub modified: String,
    pub link: String,
}
