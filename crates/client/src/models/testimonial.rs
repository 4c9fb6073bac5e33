//! Review/testimonial models and the hardcoded fallback set.

use serde::{Deserialize, Serialize};

/// Review platform a testimonial originates from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Tripadvisor,
    Google,
    Facebook,
}

/// A single customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub rating: u8,
    pub date: String,
    pub comment: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Defaults to TripAdvisor when the widget omits it.
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope of the review widget endpoint: either structured reviews, a
/// raw HTML blob for embedding, or both.
#[derive(Debug, Default, Deserialize)]
pub struct WidgetResponse {
    #[serde(default)]
    pub reviews: Vec<Testimonial>,
    #[serde(default)]
    pub html: Option<String>,
}

/// Hardcoded testimonials shown when the live widget is unreachable or
/// returns no structured data.
pub fn fallback_testimonials() -> Vec<Testimonial> {
    fn entry(
        name: &str,
        date: &str,
        comment: &str,
        location: &str,
        platform: Platform,
    ) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            rating: 5,
            date: date.to_string(),
            comment: comment.to_string(),
            avatar: None,
            location: Some(location.to_string()),
            platform,
            url: None,
        }
    }

    vec![
        entry(
            "John Smith",
            "2024-10-15",
            "Amazing experience! The guides were knowledgeable and the wildlife viewing was \
             incredible. Saw pink dolphins, sloths, and countless bird species. Highly recommend \
             Ruth Amazon Expeditions!",
            "United States",
            Platform::Tripadvisor,
        ),
        entry(
            "Maria García",
            "2024-09-28",
            "Experiencia inolvidable en Pacaya Samiria. Los guías son profesionales y conocen \
             cada rincón de la selva. La comida fue excelente y las instalaciones muy cómodas.",
            "España",
            Platform::Tripadvisor,
        ),
        entry(
            "Thomas Mueller",
            "2024-11-05",
            "Best jungle tour in Peru! Ruth and her team are exceptional. We saw anacondas, \
             monkeys, and explored remote areas of the Amazon. The camping experience was \
             authentic and safe.",
            "Germany",
            Platform::Tripadvisor,
        ),
        entry(
            "Sophie Dubois",
            "2024-08-12",
            "Un voyage extraordinaire! Les paysages sont à couper le souffle et l'équipe est \
             très attentionnée. J'ai particulièrement aimé la navigation nocturne pour observer \
             les caïmans.",
            "France",
            Platform::Google,
        ),
        entry(
            "Carlos Mendoza",
            "2024-10-22",
            "La mejor experiencia de ecoturismo que he tenido. El compromiso con la \
             sostenibilidad es evidente y los guías locales comparten su cultura con mucho \
             respeto.",
            "Colombia",
            Platform::Tripadvisor,
        ),
        entry(
            "Emma Johnson",
            "2024-09-15",
            "Absolutely magical! Swimming with pink dolphins was a dream come true. The guides \
             were fantastic and ensured everyone had a safe and memorable experience.",
            "United Kingdom",
            Platform::Tripadvisor,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_shape() {
        let fallback = fallback_testimonials();
        assert_eq!(fallback.len(), 6);
        assert!(fallback.iter().all(|t| t.rating == 5));
        assert!(fallback.iter().all(|t| t.location.is_some()));
        assert!(fallback.iter().all(|t| t.avatar.is_none() && t.url.is_none()));
    }

    #[test]
    fn platform_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&Platform::Tripadvisor).unwrap(),
            "\"tripadvisor\""
        );
        let platform: Platform = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(platform, Platform::Google);
    }

    #[test]
    fn testimonial_platform_defaults_to_tripadvisor() {
        let json = r#"{"name": "A", "rating": 4, "date": "2024-01-01", "comment": "ok"}"#;
        let testimonial: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(testimonial.platform, Platform::Tripadvisor);
    }
}
