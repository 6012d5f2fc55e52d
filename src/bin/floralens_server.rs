//! Service entrypoint: wire configuration into concrete capabilities and serve.

use anyhow::Context;
use floralens::server::{self, AppState};
use floralens::{
    Config, DetectionAdapter, DocumentStore, EnrichmentGateway, HttpClassifier, MemoryStore,
    OpenAiProvider, Orchestrator, RestStore, StoreConfig,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let classifier = Arc::new(HttpClassifier::new(
        config.detector_url.clone(),
        config.detector_api_key.clone(),
        config.detector_timeout,
    )?);
    let adapter = DetectionAdapter::new(classifier);

    let store: Arc<dyn DocumentStore> = match &config.store {
        StoreConfig::Memory => {
            tracing::warn!("using in-memory store, enrichment records will not survive restarts");
            Arc::new(MemoryStore::new())
        }
        StoreConfig::Rest { base_url } => {
            Arc::new(RestStore::new(base_url.clone(), config.store_timeout)?)
        }
    };

    let provider = Arc::new(OpenAiProvider::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.provider_timeout,
    )?);

    let gateway = Arc::new(EnrichmentGateway::new(store, provider));
    let orchestrator = Arc::new(Orchestrator::new(adapter, gateway));
    let state = AppState::new(orchestrator, config.default_threshold);

    let addr = config.socket_addr()?;
    server::serve(addr, state).await.context("serving")?;

    Ok(())
}
