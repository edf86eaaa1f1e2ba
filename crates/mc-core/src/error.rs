use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error body returned by the Moncreneau API inside an `{"error": {...}}` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetails {
  /// Machine-readable error code, e.g. `APPOINTMENT_NOT_FOUND`
  pub code: String,

  /// Human-readable description
  pub message: String,

  /// Extra context supplied by the server
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub details: Option<Map<String, Value>>,
}

/// The main error type for mc-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Structured error returned by the API with a non-2xx status
  #[error("API error {status_code} ({code}): {message}")]
  Api {
    /// Machine-readable error code
    code: String,
    /// Human-readable message
    message: String,
    /// HTTP status of the response
    status_code: u16,
    /// Optional extra context
    details: Option<Map<String, Value>>,
  },

  /// Transport failure passed through untouched: network errors, timeouts,
  /// and 4xx/5xx responses without an error envelope
  #[error("HTTP transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// Non-success status outside 4xx/5xx without an error envelope
  #[error("Unexpected HTTP status {status_code}")]
  UnexpectedStatus {
    /// HTTP status of the response
    status_code: u16,
    /// Raw response body
    body: String,
  },

  /// Successful response whose body does not match the expected shape
  #[error("Parse error: {0}")]
  Parse(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Invalid API key: {0}")]
  ApiKey(String),

  /// Caller-supplied argument that cannot be sent
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

impl Error {
  /// Build the normalized API error from a server error body and response status
  pub fn from_api(details: ApiErrorDetails, status_code: u16) -> Self {
    Error::Api {
      code: details.code,
      message: details.message,
      status_code,
      details: details.details,
    }
  }

  /// True when the server answered with a structured error
  pub fn is_api(&self) -> bool {
    matches!(self, Error::Api { .. })
  }

  /// Machine-readable code of an API error
  pub fn code(&self) -> Option<&str> {
    match self {
      Error::Api { code, .. } => Some(code),
      _ => None,
    }
  }

  /// HTTP status associated with the error, when a response was received
  pub fn status_code(&self) -> Option<u16> {
    match self {
      Error::Api { status_code, .. } | Error::UnexpectedStatus { status_code, .. } => {
        Some(*status_code)
      }
      Error::Transport(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }

  /// True for a 404 reported by the API
  pub fn is_not_found(&self) -> bool {
    self.status_code() == Some(404)
  }
}

/// Result type alias for mc-* crates
pub type Result<T> = std::result::Result<T, Error>;
