/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Top-level client handing out endpoint groups

use crate::endpoints::{appointments::AppointmentEndpoints, departments::DepartmentEndpoints};
use crate::transport::HttpClient;
use crate::webhook;
use mc_core::{Config, Result};
use std::sync::Arc;
use tracing::debug;

/// Main Moncreneau API client
///
/// Provides access to the appointment and department endpoints through
/// endpoint groups that share one transport. Cloning the client is cheap and
/// clones can be used from several tasks at once.
///
/// # Examples
///
/// ```rust,no_run
/// use mc_client::{Config, MoncreneauClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MoncreneauClient::new(Config::from_env()?)?;
///
///     for department in client.departments().list().await? {
///         println!("{}: {}", department.id, department.name);
///     }
///
///     client.appointments().cancel("apt_7f3a").await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MoncreneauClient {
  transport: Arc<HttpClient>,
}

impl MoncreneauClient {
  /// Create a new Moncreneau API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(HttpClient::new(&config)?);
    debug!("Created Moncreneau client for {}", transport.base_url());
    Ok(Self { transport })
  }

  /// Create a client for `api_key` against the production API
  pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
    Self::new(Config::new(api_key))
  }

  /// Get access to appointment endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let appointment = client.appointments().retrieve("apt_7f3a").await?;
  /// client.appointments().cancel(&appointment.id).await?;
  /// ```
  pub fn appointments(&self) -> AppointmentEndpoints {
    AppointmentEndpoints::new(self.transport.clone())
  }

  /// Get access to department endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let departments = client.departments().list().await?;
  /// let department = client.departments().retrieve(12).await?;
  /// ```
  pub fn departments(&self) -> DepartmentEndpoints {
    DepartmentEndpoints::new(self.transport.clone())
  }

  /// The shared transport
  pub fn transport(&self) -> &HttpClient {
    &self.transport
  }

  /// Verify a webhook signature using HMAC-SHA256
  ///
  /// Needs no client instance; see [`webhook::verify_webhook_signature`].
  ///
  /// # Arguments
  ///
  /// * `payload` - Raw webhook body
  /// * `signature` - Value of the `X-Webhook-Signature` header
  /// * `secret` - Your webhook secret
  pub fn verify_webhook_signature(payload: &str, signature: &str, secret: &str) -> bool {
    webhook::verify_webhook_signature(payload, signature, secret)
  }
}
