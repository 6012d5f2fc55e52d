//! Result-identity caching primitives.
//!
//! Enrichment results are cached by a [`CanonicalKey`] derived from the
//! detected label multiset, so two requests that see the same flowers share
//! one persisted record regardless of detection order or confidence values.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CanonicalKey`] | Deterministic, order-independent key for a detection set |
//! | [`DocumentStore`] | Trait for the persistent key-value document store |
//! | [`MemoryStore`] | In-process store for tests and single-node deployments |
//! | [`RestStore`] | Store backed by a remote document API over HTTP |

mod key;
mod store;

pub use key::CanonicalKey;
pub use store::{DocumentStore, MemoryStore, RestStore};
