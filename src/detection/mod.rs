//! Object detection boundary.
//!
//! The classifier itself is opaque: anything that can turn image bytes into
//! labeled, scored regions implements [`Classifier`]. The [`DetectionAdapter`]
//! sits in front of it and applies threshold filtering, producing the
//! normalized [`Detection`] list the rest of the service works with.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Classifier`] | Trait for opaque image classifiers |
//! | [`HttpClassifier`] | Classifier backed by a remote inference endpoint |
//! | [`DetectionAdapter`] | Threshold filtering over classifier output |
//! | [`Detection`] | A (label, confidence) pair surviving the threshold |

mod adapter;
mod http;

pub use adapter::DetectionAdapter;
pub use http::HttpClassifier;

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Confidence threshold applied when the request does not supply one.
pub const DEFAULT_THRESHOLD: f32 = 0.4;

/// A single detection surviving threshold filtering.
///
/// `label` serializes as `class` to match the wire format clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Bounding region reported by the classifier. Unused downstream; carried so
/// classifier payloads deserialize without loss.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Raw classifier output before threshold filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetection {
    pub label: String,
    pub confidence: f32,
    #[serde(default)]
    pub region: Option<Region>,
}

/// Opaque image classifier producing labeled, scored regions.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<Vec<RawDetection>>;
    fn name(&self) -> &'static str;
}
