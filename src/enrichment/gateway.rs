//! Cache-aside gateway over the document store and generative provider.

use super::kind::{EnrichmentKind, GENERATION_TEMPERATURE};
use super::record::EnrichmentRecord;
use crate::cache::{CanonicalKey, DocumentStore};
use crate::detection::Detection;
use crate::provider::{CompletionRequest, TextCompletion};
use crate::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Snapshot of gateway counters.
#[derive(Debug, Clone, Default)]
pub struct GatewayStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub fallbacks: u64,
    pub errors: u64,
}

impl GatewayStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
    fallbacks: AtomicU64,
    errors: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    fn to_stats(&self) -> GatewayStats {
        GatewayStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Lookup-or-generate-and-store for one enrichment kind.
///
/// [`get_or_create`](EnrichmentGateway::get_or_create) is deliberately
/// infallible: every store or provider failure is absorbed here and converted
/// to the kind's fallback text. There is no locking around the
/// miss-then-write sequence, so two concurrent misses for the same key may
/// both generate and both write. Last write wins; the content converges
/// because generation runs at low temperature. That race is an accepted
/// property.
pub struct EnrichmentGateway {
    store: Arc<dyn DocumentStore>,
    provider: Arc<dyn TextCompletion>,
    stats: AtomicStats,
}

impl EnrichmentGateway {
    pub fn new(store: Arc<dyn DocumentStore>, provider: Arc<dyn TextCompletion>) -> Self {
        Self {
            store,
            provider,
            stats: AtomicStats::new(),
        }
    }

    /// Return the enrichment text for `(kind, key)`, generating and persisting
    /// it on a cache miss.
    pub async fn get_or_create(
        &self,
        kind: EnrichmentKind,
        key: &CanonicalKey,
        detections: &[Detection],
    ) -> String {
        match self.try_get_or_create(kind, key, detections).await {
            Ok(text) => text,
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                self.stats.fallbacks.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    kind = kind.label(),
                    key = %key,
                    error = %e,
                    "enrichment failed, returning fallback text"
                );
                kind.fallback_text().to_string()
            }
        }
    }

    async fn try_get_or_create(
        &self,
        kind: EnrichmentKind,
        key: &CanonicalKey,
        detections: &[Detection],
    ) -> Result<String> {
        if let Some(text) = self.lookup(kind, key).await? {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            tracing::info!(kind = kind.label(), key = %key, "enrichment served from cache");
            return Ok(text);
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);

        let request = CompletionRequest {
            system: kind.system_instruction().to_string(),
            prompt: kind.prompt(&describe(detections)),
            max_tokens: kind.max_tokens(),
            temperature: GENERATION_TEMPERATURE,
        };
        let text = self.provider.complete(request).await?.trim().to_string();

        // An empty generation must not poison the cache for this key.
        if text.is_empty() {
            self.stats.fallbacks.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(kind = kind.label(), key = %key, "provider returned empty text");
            return Ok(kind.fallback_text().to_string());
        }

        let record = EnrichmentRecord::new(text.clone(), detections);
        self.store
            .put(kind.collection(), key, serde_json::to_value(&record)?)
            .await?;
        self.stats.writes.fetch_add(1, Ordering::Relaxed);
        tracing::info!(kind = kind.label(), key = %key, "enrichment generated and persisted");

        Ok(text)
    }

    async fn lookup(&self, kind: EnrichmentKind, key: &CanonicalKey) -> Result<Option<String>> {
        match self.store.get(kind.collection(), key).await? {
            Some(document) => {
                let record: EnrichmentRecord = serde_json::from_value(document)
                    .map_err(|e| Error::store(format!("undecodable cached record: {e}")))?;
                Ok(Some(record.text))
            }
            None => Ok(None),
        }
    }

    pub fn stats(&self) -> GatewayStats {
        self.stats.to_stats()
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}

/// Human-readable detection description used in prompts: label plus confidence
/// formatted to two decimals, comma-joined.
fn describe(detections: &[Detection]) -> String {
    detections
        .iter()
        .map(|d| format!("{} (confidence: {:.2})", d.label, d.confidence))
        .collect::<Vec<_>>()
        .join(", ")
}
