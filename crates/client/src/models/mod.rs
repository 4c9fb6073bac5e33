//! Data models for WordPress API responses.
//!
//! Types are organized by resource in submodules and re-exported here for
//! convenient access. Wire-shape-only types (raw API index, widget
//! envelope, SEO source fields) stay in their submodules.

pub mod common;
pub mod media;
pub mod menu;
pub mod page;
pub mod post;
pub mod seo;
pub mod site;
pub mod testimonial;

pub use common::Rendered;
pub use media::{Media, MediaDetails, MediaSize};
pub use menu::{MenuItem, MenuResponse};
pub use page::Page;
pub use post::{CustomFields, Post};
pub use seo::{ContentType, Robots, SeoMetadata, SeoSource};
pub use site::{ApiIndex, SiteIcons, SiteInfo};
pub use testimonial::{Platform, Testimonial, WidgetResponse, fallback_testimonials};
