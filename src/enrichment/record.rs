use crate::detection::Detection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted enrichment document, keyed by `(kind, canonical key)`.
///
/// Append-once: written on the first cache miss for a key and never updated
/// or deleted afterwards, even if a later request observes different
/// confidences for the same label set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub text: String,
    pub source_labels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl EnrichmentRecord {
    pub fn new(text: impl Into<String>, detections: &[Detection]) -> Self {
        Self {
            text: text.into(),
            source_labels: detections.iter().map(|d| d.label.clone()).collect(),
            created_at: Utc::now(),
        }
    }
}
