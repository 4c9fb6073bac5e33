//! Centralized constants for the wp-headless workspace.
//!
//! Default values used across crates to avoid magic value duplication.

/// Default WordPress REST API root (the `wp/v2` namespace).
pub const DEFAULT_API_URL: &str = "http://web.ruth/wp-json/wp/v2";

/// Default WordPress site root, used for non-`wp/v2` routes
/// (menus plugin, site info, custom widget endpoints).
pub const DEFAULT_BASE_URL: &str = "http://web.ruth";

/// Page size requested when listing pages or posts.
///
/// WordPress caps `per_page` at 100; a single request at this size is the
/// whole pagination story for a site of this scale.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Menu slug fetched when the caller does not name one.
pub const DEFAULT_MENU_SLUG: &str = "primary";
