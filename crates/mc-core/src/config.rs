//! Configuration management for the Moncreneau client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Main configuration struct for the Moncreneau client
///
/// Fixed once a client has been built from it.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Moncreneau API key, sent as `X-API-Key`
  pub api_key: String,

  /// Base URL for the Moncreneau API, including the version prefix
  pub base_url: String,

  /// Request timeout in milliseconds
  pub timeout_ms: u64,

  /// Upper bound on retries. Stored for callers; the client never retries.
  pub max_retries: u32,
}

impl Config {
  /// Create a config for `api_key` with default values for everything else
  pub fn new(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::MONCRENEAU_BASE_URL.to_string(),
      timeout_ms: crate::DEFAULT_TIMEOUT_MS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
    }
  }

  /// Load configuration from environment variables
  ///
  /// Reads `MONCRENEAU_API_KEY` (required), `MONCRENEAU_BASE_URL`,
  /// `MONCRENEAU_TIMEOUT_MS` and `MONCRENEAU_MAX_RETRIES`. A `.env` file is
  /// honoured when present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("MONCRENEAU_API_KEY")
      .map_err(|_| Error::ApiKey("MONCRENEAU_API_KEY not set".to_string()))?;

    let base_url =
      env::var("MONCRENEAU_BASE_URL").unwrap_or_else(|_| crate::MONCRENEAU_BASE_URL.to_string());

    let timeout_ms = match env::var("MONCRENEAU_TIMEOUT_MS") {
      Ok(v) => v.parse::<u64>().map_err(|_| Error::Config("Invalid MONCRENEAU_TIMEOUT_MS".to_string()))?,
      Err(_) => crate::DEFAULT_TIMEOUT_MS,
    };

    let max_retries = match env::var("MONCRENEAU_MAX_RETRIES") {
      Ok(v) => {
        v.parse::<u32>().map_err(|_| Error::Config("Invalid MONCRENEAU_MAX_RETRIES".to_string()))?
      }
      Err(_) => crate::DEFAULT_MAX_RETRIES,
    };

    let config = Config { api_key, base_url, timeout_ms, max_retries };
    config.validate()?;
    Ok(config)
  }

  /// Override the base URL
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the request timeout (milliseconds)
  pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
    self.timeout_ms = timeout_ms;
    self
  }

  /// Override the retry bound
  pub fn with_max_retries(mut self, max_retries: u32) -> Self {
    self.max_retries = max_retries;
    self
  }

  /// Request timeout as a `Duration`
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }

  /// Check the invariants a client relies on
  ///
  /// # Errors
  ///
  /// `Error::ApiKey` for a blank key, `Error::Config` for a base URL that is
  /// not an absolute http(s) URL or a zero timeout.
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key must not be empty".to_string()));
    }

    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
      return Err(Error::Config(format!("Unsupported base URL scheme: {}", url.scheme())));
    }

    if self.timeout_ms == 0 {
      return Err(Error::Config("Timeout must be greater than zero".to_string()));
    }

    Ok(())
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_ms", &self.timeout_ms)
      .field("max_retries", &self.max_retries)
      .finish()
  }
}
