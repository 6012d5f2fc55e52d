use super::{Classifier, Detection};
use crate::Result;
use std::sync::Arc;

/// Threshold filtering over classifier output.
///
/// Keeps detections with `confidence >= threshold`, preserving the
/// classifier's native order. Order is not significant downstream but must be
/// stable for display.
pub struct DetectionAdapter {
    classifier: Arc<dyn Classifier>,
}

impl DetectionAdapter {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub async fn detect(&self, image: &[u8], threshold: f32) -> Result<Vec<Detection>> {
        let raw = self.classifier.classify(image).await?;
        let detections: Vec<Detection> = raw
            .into_iter()
            .filter(|r| r.confidence >= threshold)
            .map(|r| Detection::new(r.label, r.confidence))
            .collect();
        tracing::debug!(
            classifier = self.classifier.name(),
            kept = detections.len(),
            threshold,
            "detection pass complete"
        );
        Ok(detections)
    }
}
