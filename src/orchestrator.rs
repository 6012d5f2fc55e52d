//! Request orchestration: detection, key derivation, and enrichment assembly.

use crate::cache::CanonicalKey;
use crate::detection::{Detection, DetectionAdapter};
use crate::enrichment::{EnrichmentGateway, EnrichmentKind};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Combined detection-plus-enrichment response for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<Detection>,
    pub recommendation: String,
    pub flower_details: String,
}

/// Outcome of handling one image.
#[derive(Debug, Clone)]
pub enum Outcome {
    Detected(PredictResponse),
    /// Nothing survived thresholding; no store or provider call was made.
    NothingDetected,
}

pub struct Orchestrator {
    adapter: DetectionAdapter,
    gateway: Arc<EnrichmentGateway>,
}

impl Orchestrator {
    pub fn new(adapter: DetectionAdapter, gateway: Arc<EnrichmentGateway>) -> Self {
        Self { adapter, gateway }
    }

    /// Detect flowers in `image` and enrich the result.
    ///
    /// The canonical key is computed once; the two enrichment kinds share it
    /// and run concurrently, since they have no data dependency on each other.
    pub async fn handle(&self, image: &[u8], threshold: f32) -> Result<Outcome> {
        let predictions = self.adapter.detect(image, threshold).await?;
        if predictions.is_empty() {
            tracing::info!(threshold, "no detections above threshold");
            return Ok(Outcome::NothingDetected);
        }

        let key = CanonicalKey::from_detections(&predictions);
        let (recommendation, flower_details) = tokio::join!(
            self.gateway
                .get_or_create(EnrichmentKind::Recommendation, &key, &predictions),
            self.gateway
                .get_or_create(EnrichmentKind::Details, &key, &predictions),
        );

        Ok(Outcome::Detected(PredictResponse {
            predictions,
            recommendation,
            flower_details,
        }))
    }
}
