//! Canonical cache key derivation.

use crate::detection::Detection;
use serde::{Deserialize, Serialize};

/// Cache identity of a detection set: every detection's label, sorted
/// lexicographically and joined with `_`.
///
/// Repeated labels stay in the key: three roses key as `rose_rose_rose`, not
/// `rose`. The key is a pure function of the label multiset, so ordering and
/// confidence values never affect it. It is used as a durable store key, so
/// its derivation must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut labels: Vec<&str> = detections.iter().map(|d| d.label.as_str()).collect();
        labels.sort_unstable();
        Self(labels.join("_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CanonicalKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CanonicalKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
