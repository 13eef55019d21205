//! Configuration management for the CoinMarketCap client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;
use url::Url;

/// Main configuration struct for the CoinMarketCap client
///
/// Fields are public so a client can be reconfigured after construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
  /// CoinMarketCap Pro API key
  pub api_key: String,

  /// Base URL for the CoinMarketCap Pro API
  pub base_url: String,

  /// Forces every request onto this API version (e.g. "v1").
  ///
  /// When unset each endpoint uses the version it is served under.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,

  /// Opaque options handed to the fetcher with every request
  /// (`headers`, `timeout`, ...).
  #[serde(default)]
  pub fetch_config: Map<String, Value>,
}

impl Config {
  /// Create a config with default values for the given key
  pub fn new(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::CMC_BASE_URL.to_string(),
      version: None,
      fetch_config: Map::new(),
    }
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("CMC_PRO_API_KEY")
      .map_err(|_| Error::ApiKey("CMC_PRO_API_KEY not set".to_string()))?;

    let mut config = Config::new(api_key);

    if let Ok(base_url) = env::var("CMC_BASE_URL") {
      Url::parse(&base_url).map_err(|_| Error::Config("Invalid CMC_BASE_URL".to_string()))?;
      config.base_url = base_url;
    }

    config.version = env::var("CMC_API_VERSION").ok().filter(|v| !v.is_empty());

    if let Ok(timeout) = env::var("CMC_TIMEOUT_MS") {
      let timeout: u64 =
        timeout.parse().map_err(|_| Error::Config("Invalid CMC_TIMEOUT_MS".to_string()))?;
      config.fetch_config.insert("timeout".to_string(), Value::from(timeout));
    }

    Ok(config)
  }

  /// Builder-style setter for the version override
  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }

  /// Builder-style setter for a single fetch option
  pub fn with_fetch_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.fetch_config.insert(key.into(), value.into());
    self
  }
}
