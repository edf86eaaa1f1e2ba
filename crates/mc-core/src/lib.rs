//! # mc-core
//!
//! Configuration, error types and wire constants shared by the `mc-*` crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ApiErrorDetails, Error, Result};

/// Base URL of the production Moncreneau API
pub const MONCRENEAU_BASE_URL: &str = "https://mc-prd.duckdns.org/api/v1";

/// Request timeout applied when none is configured (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Retry bound applied when none is configured
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Header carrying the webhook signature on deliveries from Moncreneau
pub const WEBHOOK_SIGNATURE_HEADER: &str = "X-Webhook-Signature";
