//! # floralens
//!
//! Flower detection service with canonically-keyed caching of generative
//! enrichment.
//!
//! ## Overview
//!
//! An uploaded image is run through an object-detection classifier; the
//! detected flower classes are enriched with a care recommendation and
//! botanical details produced by a generative text provider. Both enrichments
//! are cached in a document store under a canonical key derived from the
//! detected label multiset, so repeated sightings of the same flower
//! combination never pay for a second generative call.
//!
//! ## Core Philosophy
//!
//! - **Result identity, not request identity**: the cache key is a pure
//!   function of the detected label multiset, so ordering and confidence
//!   values never fragment the cache
//! - **Availability over correctness signaling**: enrichment failures degrade
//!   to fixed fallback text instead of failing the request
//! - **Injected capabilities**: classifier, document store, and generative
//!   provider are trait objects wired up at startup, never ambient globals
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`detection`] | Classifier boundary and threshold filtering |
//! | [`cache`] | Canonical key derivation and document store backends |
//! | [`enrichment`] | Cache-aside gateway over store and provider |
//! | [`provider`] | Generative text-completion boundary |
//! | [`orchestrator`] | Per-request composition of detection and enrichment |
//! | [`server`] | Axum HTTP surface |
//! | [`config`] | Environment-driven configuration |

pub mod cache;
pub mod config;
pub mod detection;
pub mod enrichment;
pub mod orchestrator;
pub mod provider;
pub mod server;

// Re-export main types for convenience
pub use cache::{CanonicalKey, DocumentStore, MemoryStore, RestStore};
pub use config::{Config, StoreConfig};
pub use detection::{Classifier, Detection, DetectionAdapter, HttpClassifier, DEFAULT_THRESHOLD};
pub use enrichment::{EnrichmentGateway, EnrichmentKind, EnrichmentRecord};
pub use orchestrator::{Orchestrator, Outcome, PredictResponse};
pub use provider::{CompletionRequest, OpenAiProvider, TextCompletion};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
