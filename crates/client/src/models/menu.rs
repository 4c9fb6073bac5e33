//! Navigation menu models (WP REST API Menus plugin).
//!
//! Menu items form an implicit tree through `parent`, which the plugin
//! serves as either a string or a number depending on its version. The
//! relation is preserved as an opaque string; nothing here builds the
//! tree.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{string_from_number_or_string, u64_from_string_or_number};

/// One entry of a navigation menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub slug: String,
    /// Id of the parent menu item, `"0"` for top-level entries.
    #[serde(
        rename = "menu_item_parent",
        default,
        deserialize_with = "string_from_number_or_string"
    )]
    pub parent: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub target: String,
    /// Object type this item links to (`page`, `post`, `custom`, ...).
    #[serde(default)]
    pub object: String,
    #[serde(default, deserialize_with = "u64_from_string_or_number")]
    pub object_id: u64,
}

/// Envelope of the menu endpoint response.
#[derive(Debug, Default, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
