//! Enrichment cache gateway.
//!
//! Two independent enrichment kinds (a care recommendation and botanical
//! details) share one cache-aside flow: look the canonical key up in the
//! document store, and only on a miss invoke the generative provider and
//! persist the result. Everything kind-specific (collection, prompts, token
//! budget, fallback text) lives in the [`EnrichmentKind`] profile so the
//! gateway logic exists exactly once.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`EnrichmentGateway`] | Lookup-or-generate-and-store, with failure absorption |
//! | [`EnrichmentKind`] | Per-kind profile: collection, prompts, budget, fallback |
//! | [`EnrichmentRecord`] | Persisted document: text, source labels, timestamp |
//! | [`GatewayStats`] | Hit/miss/write/fallback counters |

mod gateway;
mod kind;
mod record;

pub use gateway::{EnrichmentGateway, GatewayStats};
pub use kind::{EnrichmentKind, GENERATION_TEMPERATURE};
pub use record::EnrichmentRecord;
