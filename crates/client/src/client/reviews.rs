//! Review gateway methods for [`WpClient`].

use tracing::{debug, warn};

use crate::client::WpClient;
use crate::endpoints;
use crate::models::{Testimonial, fallback_testimonials};

impl WpClient {
    /// Fetch TripAdvisor reviews through the backend widget endpoint.
    ///
    /// Returns the structured reviews when the widget provides any;
    /// otherwise the hardcoded fallback set, including on any fetch
    /// failure.
    pub async fn tripadvisor_reviews(&self) -> Vec<Testimonial> {
        match endpoints::get_review_widget(&self.http, &self.base_url).await {
            Ok(widget) if !widget.reviews.is_empty() => widget.reviews,
            Ok(_) => {
                debug!("review widget returned no structured reviews, using fallback");
                fallback_testimonials()
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch reviews");
                fallback_testimonials()
            }
        }
    }

    /// Fetch the raw widget HTML for direct embedding.
    ///
    /// Returns an empty string on any failure; unlike
    /// [`tripadvisor_reviews`](Self::tripadvisor_reviews), there is no
    /// fallback content.
    pub async fn tripadvisor_widget_html(&self) -> String {
        match endpoints::get_review_widget(&self.http, &self.base_url).await {
            Ok(widget) => widget.html.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "failed to fetch review widget html");
                String::new()
            }
        }
    }

    /// Fetch testimonials from the dedicated REST collection, falling
    /// back to the hardcoded set on any failure.
    pub async fn testimonials(&self) -> Vec<Testimonial> {
        match endpoints::list_testimonials(&self.http, &self.api_url).await {
            Ok(testimonials) => testimonials,
            Err(e) => {
                warn!(error = %e, "failed to fetch testimonials");
                fallback_testimonials()
            }
        }
    }
}
