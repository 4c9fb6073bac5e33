//! Site-level metadata models.

use serde::{Deserialize, Serialize};

/// Raw shape of the API index served at `{base}/wp-json`.
///
/// Only the site-description fields are deserialized; the route listings
/// that make up most of the payload are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ApiIndex {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub site_icon_url: Option<String>,
}

/// Site metadata with derived icon URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub home: String,
    pub icon: SiteIcons,
}

/// Icon URLs for the site.
///
/// The sized variants are derived from the primary icon URL by inserting
/// `-192x192` / `-512x512` before the file extension; they are `None`
/// when the site reports no icon of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteIcons {
    pub favicon: String,
    pub icon_192: Option<String>,
    pub icon_512: Option<String>,
}
