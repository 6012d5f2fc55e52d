//! Document store implementations.

use super::key::CanonicalKey;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// Opaque key-value document store. Documents live in logical collections, one
/// per enrichment kind, addressed by canonical key.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(
        &self,
        collection: &str,
        key: &CanonicalKey,
    ) -> Result<Option<serde_json::Value>>;
    async fn put(
        &self,
        collection: &str,
        key: &CanonicalKey,
        document: serde_json::Value,
    ) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// In-process store. Suitable for tests and single-node deployments; records
/// do not survive a restart.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, serde_json::Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in a collection. Test convenience.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .unwrap()
            .get(collection)
            .map(|c| c.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(
        &self,
        collection: &str,
        key: &CanonicalKey,
    ) -> Result<Option<serde_json::Value>> {
        let collections = self.collections.read().unwrap();
        Ok(collections
            .get(collection)
            .and_then(|c| c.get(key.as_str()))
            .cloned())
    }

    async fn put(
        &self,
        collection: &str,
        key: &CanonicalKey,
        document: serde_json::Value,
    ) -> Result<()> {
        let mut collections = self.collections.write().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.as_str().to_string(), document);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Store backed by a remote document API over HTTP.
///
/// Documents live at `{base_url}/{collection}/{key}`; a 404 on GET means the
/// document is absent.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("store HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn document_url(&self, collection: &str, key: &CanonicalKey) -> String {
        format!("{}/{}/{}", self.base_url, collection, key)
    }
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn get(
        &self,
        collection: &str,
        key: &CanonicalKey,
    ) -> Result<Option<serde_json::Value>> {
        let response = self
            .client
            .get(self.document_url(collection, key))
            .send()
            .await
            .map_err(|e| Error::store(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::store(format!(
                "store GET returned {}",
                response.status()
            )));
        }

        let document = response
            .json()
            .await
            .map_err(|e| Error::store(format!("undecodable store document: {e}")))?;
        Ok(Some(document))
    }

    async fn put(
        &self,
        collection: &str,
        key: &CanonicalKey,
        document: serde_json::Value,
    ) -> Result<()> {
        let response = self
            .client
            .put(self.document_url(collection, key))
            .json(&document)
            .send()
            .await
            .map_err(|e| Error::store(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::store(format!(
                "store PUT returned {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_round_trips_documents() {
        let store = MemoryStore::new();
        let key = CanonicalKey::from("rose_tulip");

        assert!(store.get("flower_details", &key).await.unwrap().is_none());

        store
            .put("flower_details", &key, json!({"text": "hardy perennials"}))
            .await
            .unwrap();

        let doc = store.get("flower_details", &key).await.unwrap().unwrap();
        assert_eq!(doc["text"], "hardy perennials");
        assert_eq!(store.len("flower_details"), 1);
    }

    #[tokio::test]
    async fn memory_store_collections_are_independent() {
        let store = MemoryStore::new();
        let key = CanonicalKey::from("rose");

        store
            .put("flower_recommendations", &key, json!({"text": "water daily"}))
            .await
            .unwrap();

        assert!(store.get("flower_details", &key).await.unwrap().is_none());
    }
}
