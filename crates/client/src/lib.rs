//! WordPress REST API gateways for a headless site.
//!
//! This crate provides typed, degrade-on-failure access to the content of
//! a WordPress-compatible backend: pages, posts, media, menus, site
//! metadata, SEO metadata, and a third-party review widget. Every gateway
//! method performs a single request and converts any failure into its
//! documented default (empty list, `None`, empty string, or fallback
//! data) instead of surfacing an error.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod scrape;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::WpClient;
pub use client::builder::WpClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ContentType, CustomFields, Media, MediaSize, MenuItem, Page, Platform, Post, Rendered, Robots,
    SeoMetadata, SiteIcons, SiteInfo, Testimonial, fallback_testimonials,
};
pub use scrape::parse_head;
