//! HTTP transport layer for Moncreneau API requests
//!
//! Every request leaves through [`HttpClient`], which attaches the API key,
//! applies the configured timeout and turns failing responses into
//! [`mc_core::Error`]. Endpoint groups never talk to `reqwest` directly.

use mc_core::{ApiErrorDetails, Config, Error, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Lower-case form of [`mc_core::API_KEY_HEADER`]
const API_KEY_HEADER_NAME: &str = "x-api-key";

/// Error envelope returned by the API: `{"error": {"code", "message", "details"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
  error: ApiErrorDetails,
}

/// HTTP client bound to one Moncreneau base URL and API key
pub struct HttpClient {
  client: Client,
  base_url: String,
  timeout: Duration,
  max_retries: u32,
}

impl HttpClient {
  /// Create a new transport instance
  ///
  /// # Errors
  ///
  /// Fails when the configuration does not validate, when the API key cannot
  /// be sent as a header value, or when the underlying client cannot be built.
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;

    let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
      Error::ApiKey("API key contains characters not allowed in an HTTP header".to_string())
    })?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER_NAME), api_key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder()
      .default_headers(headers)
      .timeout(config.timeout())
      .user_agent(concat!("mc-client/", env!("CARGO_PKG_VERSION")))
      .build()?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      timeout: config.timeout(),
      max_retries: config.max_retries,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self::new(&Config::new("test_key").with_base_url("https://mock.moncreneau.test/api/v1"))
      .expect("mock config is valid")
  }

  /// Make an authenticated GET request and decode the JSON response
  ///
  /// # Arguments
  ///
  /// * `path` - Path below the base URL, starting with `/`
  #[instrument(skip(self))]
  pub async fn get<T>(&self, path: &str) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let request = self.client.get(self.build_url(path)?);
    let response = self.send(request).await?;
    self.decode(response).await
  }

  /// Make an authenticated GET request with query parameters
  ///
  /// `query` is serialized as URL query members; `None` fields are left out,
  /// and a query with no members produces no query string at all.
  #[instrument(skip(self, query))]
  pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
  where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
  {
    let request = self.client.get(self.build_url(path)?).query(query);
    let response = self.send(request).await?;
    self.decode(response).await
  }

  /// Make an authenticated POST request with a JSON body
  #[instrument(skip(self, body))]
  pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    let payload = serde_json::to_vec(body)?;
    let request = self.client.post(self.build_url(path)?).body(payload);
    let response = self.send(request).await?;
    self.decode(response).await
  }

  /// Make an authenticated DELETE request; the response body is discarded
  #[instrument(skip(self))]
  pub async fn delete(&self, path: &str) -> Result<()> {
    let request = self.client.delete(self.build_url(path)?);
    self.send(request).await?;
    Ok(())
  }

  /// Build the full URL for an API request
  fn build_url(&self, path: &str) -> Result<Url> {
    let url = if path.starts_with('/') {
      format!("{}{}", self.base_url, path)
    } else {
      format!("{}/{}", self.base_url, path)
    };

    Url::parse(&url).map_err(|e| Error::Config(format!("Invalid request URL '{}': {}", url, e)))
  }

  /// Send the request and normalize any non-success response
  async fn send(&self, request: RequestBuilder) -> Result<Response> {
    let response = request.send().await.map_err(|e| {
      error!("Request failed: {}", e);
      Error::Transport(e)
    })?;

    let status = response.status();
    if status.is_success() {
      debug!("Request successful with status: {}", status);
      return Ok(response);
    }

    let transport_error = response.error_for_status_ref().err();
    let body = response.text().await.unwrap_or_default();
    Err(normalize_error(status, &body, transport_error))
  }

  /// Deserialize a successful response body
  async fn decode<T>(&self, response: Response) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let text = response.text().await?;
    debug!("Response body length: {} bytes", text.len());

    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", excerpt(&text, 500));

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt(&text, 200)))
    })
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Configured retry bound; requests are never retried by the client
  pub fn max_retries(&self) -> u32 {
    self.max_retries
  }
}

impl fmt::Debug for HttpClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HttpClient")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("max_retries", &self.max_retries)
      .finish()
  }
}

/// Map a failing response onto the crate error
///
/// A body carrying the API's error envelope becomes `Error::Api`. Anything
/// else is handed back as the transport's own status error, untouched.
fn normalize_error(
  status: StatusCode,
  body: &str,
  transport_error: Option<reqwest::Error>,
) -> Error {
  match serde_json::from_str::<ErrorEnvelope>(body) {
    Ok(envelope) => {
      warn!(
        "API returned {} with code {}: {}",
        status, envelope.error.code, envelope.error.message
      );
      Error::from_api(envelope.error, status.as_u16())
    }
    Err(_) => {
      error!("Request failed with status: {}", status);
      match transport_error {
        Some(e) => Error::Transport(e),
        None => Error::UnexpectedStatus { status_code: status.as_u16(), body: body.to_string() },
      }
    }
  }
}

/// First `max_chars` characters of `text`
fn excerpt(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}
