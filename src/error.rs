use thiserror::Error;

/// Unified error type for the service.
///
/// Only `Input` and `Detection` ever cross the orchestrator boundary; store and
/// provider failures are absorbed by the enrichment gateway and degrade to
/// fallback text instead of propagating.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("detection failed: {0}")]
    Detection(String),

    #[error("document store error: {0}")]
    Store(String),

    #[error("generative provider error: {0}")]
    Provider(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    pub fn detection(msg: impl Into<String>) -> Self {
        Error::Detection(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
