//! Environment-driven service configuration.
//!
//! All knobs are plain environment variables with conservative defaults so the
//! server starts with nothing but a classifier endpoint configured.

use crate::detection::DEFAULT_THRESHOLD;
use crate::{Error, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Where enrichment records are persisted.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// In-process store. Records do not survive a restart.
    Memory,
    /// Remote document store reachable over HTTP at this base URL.
    Rest { base_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub detector_url: String,
    pub detector_api_key: Option<String>,
    pub detector_timeout: Duration,
    pub openai_base_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub provider_timeout: Duration,
    pub store: StoreConfig,
    pub store_timeout: Duration,
    pub default_threshold: f32,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `FLORALENS_DETECTOR_URL` is the only required variable.
    pub fn from_env() -> Result<Self> {
        let detector_url = env::var("FLORALENS_DETECTOR_URL")
            .map_err(|_| Error::configuration("FLORALENS_DETECTOR_URL is not set"))?;

        let store = match env::var("FLORALENS_STORE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => StoreConfig::Rest { base_url },
            _ => StoreConfig::Memory,
        };

        let default_threshold =
            env_parse::<f32>("FLORALENS_DEFAULT_THRESHOLD").unwrap_or(DEFAULT_THRESHOLD);
        if !(0.0..=1.0).contains(&default_threshold) {
            return Err(Error::configuration(format!(
                "FLORALENS_DEFAULT_THRESHOLD must be in [0, 1], got {default_threshold}"
            )));
        }

        Ok(Self {
            host: env::var("FLORALENS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse::<u16>("FLORALENS_PORT").unwrap_or(5000),
            detector_url,
            detector_api_key: env::var("FLORALENS_DETECTOR_API_KEY").ok(),
            detector_timeout: Duration::from_secs(
                env_parse::<u64>("FLORALENS_DETECTOR_TIMEOUT_SECS").unwrap_or(30),
            ),
            openai_base_url: env::var("FLORALENS_OPENAI_BASE_URL").ok(),
            openai_api_key: env::var("FLORALENS_OPENAI_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .ok(),
            openai_model: env::var("FLORALENS_OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            provider_timeout: Duration::from_secs(
                env_parse::<u64>("FLORALENS_PROVIDER_TIMEOUT_SECS").unwrap_or(30),
            ),
            store,
            store_timeout: Duration::from_secs(
                env_parse::<u64>("FLORALENS_STORE_TIMEOUT_SECS").unwrap_or(10),
            ),
            default_threshold,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::configuration(format!("invalid listen address: {e}")))
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse::<T>().ok())
}
