//! Per-kind enrichment profiles.

/// Sampling temperature for all enrichment generations. Low on purpose: cached
/// results should read the same across regenerations of the same key.
pub const GENERATION_TEMPERATURE: f64 = 0.2;

/// The two enrichment purposes sharing the caching mechanism.
///
/// Everything that differs between them is answered here; the gateway itself
/// is kind-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrichmentKind {
    Recommendation,
    Details,
}

impl EnrichmentKind {
    pub const ALL: [EnrichmentKind; 2] = [EnrichmentKind::Recommendation, EnrichmentKind::Details];

    /// Logical store collection holding this kind's records.
    pub fn collection(&self) -> &'static str {
        match self {
            EnrichmentKind::Recommendation => "flower_recommendations",
            EnrichmentKind::Details => "flower_details",
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            EnrichmentKind::Recommendation => {
                "You are an expert flower assistant. Respond with the care each mentioned \
                 flower needs."
            }
            EnrichmentKind::Details => {
                "You are an expert botany assistant. Respond with the place of origin, \
                 scientific name, and main characteristics of the mentioned flowers."
            }
        }
    }

    /// User prompt for a miss, given the human-readable detection description.
    pub fn prompt(&self, description: &str) -> String {
        match self {
            EnrichmentKind::Recommendation => format!(
                "Give a very concise care recommendation for the detected flowers: {description}."
            ),
            EnrichmentKind::Details => format!(
                "Provide details about the following flowers: {description}. Include place of \
                 origin, scientific name, and main characteristics."
            ),
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            EnrichmentKind::Recommendation => 300,
            EnrichmentKind::Details => 400,
        }
    }

    /// Returned when generation fails or comes back empty. Never persisted.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            EnrichmentKind::Recommendation => "Could not obtain a care recommendation.",
            EnrichmentKind::Details => "Could not obtain details about the flowers.",
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            EnrichmentKind::Recommendation => "recommendation",
            EnrichmentKind::Details => "details",
        }
    }
}
