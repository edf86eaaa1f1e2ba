//! # mc-client
//!
//! A Moncreneau appointment-scheduling API client for Rust.
//!
//! ## Features
//!
//! - **Typed**: Requests and responses are `mc-models` structs
//! - **Async/Await**: Built on reqwest, usable from any tokio runtime
//! - **One error type**: API errors are normalized once, at the transport
//! - **Webhooks**: HMAC-SHA256 signature verification with no client needed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mc_client::{Config, CreateAppointmentRequest, MoncreneauClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MoncreneauClient::new(Config::new("mk_test_abc123"))?;
//!
//!     let request = CreateAppointmentRequest::new(12, "2025-01-15T10:00:00", "Mamadou Diallo");
//!     let appointment = client.appointments().create(&request).await?;
//!     println!("QR code: {}", appointment.qr_code);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, mc_core::Error>`. A failing response with an
//! `{"error": {...}}` body becomes `Error::Api` carrying the server's code,
//! message and HTTP status; any other failure is passed through as
//! `Error::Transport`. Requests are never retried: `max_retries` is recorded
//! in the configuration for callers that implement their own policy.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;
pub mod webhook;

// Re-export the main client and common types
pub use client::MoncreneauClient;
pub use mc_core::{ApiErrorDetails, Config, Error, Result};
pub use mc_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{appointments::AppointmentEndpoints, departments::DepartmentEndpoints};
pub use transport::HttpClient;
pub use webhook::{compute_webhook_signature, verify_webhook_json, verify_webhook_signature};
