//! Media attachment models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A media attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_details: MediaDetails,
}

/// Dimensions and size variants of a media attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaDetails {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Variants keyed by size label, e.g. `thumbnail`, `medium`, `full`.
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
}

/// One generated size variant of a media attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSize {
    pub source_url: String,
    pub width: u32,
    pub height: u32,
}
