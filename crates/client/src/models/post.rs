//! Post models for the WordPress posts API.
//!
//! Posts carry the same rendered fields as pages plus taxonomy ids and an
//! open-ended block of ACF custom fields. The known custom-field keys are
//! the Spanish ACF names the backend defines; everything else is kept in
//! the `extra` mapping untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::Rendered;
use crate::serde_helpers::opt_string_from_number_or_string;

/// A WordPress post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
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
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    /// ACF custom fields, absent when the plugin is not active.
    #[serde(rename = "acf", default)]
    pub custom_fields: Option<CustomFields>,
}

/// ACF custom fields attached to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomFields {
    /// Tour price; the backend serves this as a string or a number
    /// depending on the field configuration.
    #[serde(
        rename = "precio",
        default,
        deserialize_with = "opt_string_from_number_or_string"
    )]
    pub price: Option<String>,
    #[serde(rename = "duracion", default)]
    pub duration: Option<String>,
    #[serde(rename = "grupo_minimo", default)]
    pub group_min: Option<u32>,
    #[serde(rename = "grupo_maximo", default)]
    pub group_max: Option<u32>,
    /// Any further ACF keys, preserved as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
