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

//! `/appointments` endpoints: book, look up, list and cancel

use super::{EndpointBase, impl_endpoint_base, resource_path};
use crate::transport::HttpClient;
use mc_core::Result;
use mc_models::appointments::{
  Appointment, AppointmentPage, CreateAppointmentRequest, ListAppointmentsParams,
};
use std::sync::Arc;
use tracing::{info, instrument};

const COLLECTION: &str = "/appointments";

/// Appointment endpoints
#[derive(Debug, Clone)]
pub struct AppointmentEndpoints {
  transport: Arc<HttpClient>,
}

impl AppointmentEndpoints {
  /// Create a new appointment endpoints instance
  pub fn new(transport: Arc<HttpClient>) -> Self {
    Self { transport }
  }

  /// Book a new appointment
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use mc_client::{Config, MoncreneauClient, CreateAppointmentRequest};
  /// # async fn run() -> mc_client::Result<()> {
  /// # let client = MoncreneauClient::new(Config::new("mk_test_abc123"))?;
  /// let request = CreateAppointmentRequest::new(12, "2025-01-15T10:00:00", "Mamadou Diallo")
  ///   .with_external_user_id("user-42");
  /// let appointment = client.appointments().create(&request).await?;
  /// println!("Booked {} ({})", appointment.id, appointment.status);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, request), fields(department_id = request.department_id))]
  pub async fn create(&self, request: &CreateAppointmentRequest) -> Result<Appointment> {
    let appointment: Appointment = self.transport.post(COLLECTION, request).await?;
    info!("Created appointment {}", appointment.id);
    Ok(appointment)
  }

  /// Retrieve an appointment by ID
  ///
  /// A missing appointment surfaces as `Error::Api` with status 404. An empty
  /// or dot-only `id` is refused with `Error::InvalidInput` before any request.
  #[instrument(skip(self))]
  pub async fn retrieve(&self, id: &str) -> Result<Appointment> {
    self.transport.get(&resource_path(COLLECTION, &[id])?).await
  }

  /// List appointments with pagination and filters
  ///
  /// `None` sends the request without a query string and lets the server
  /// pick its default page.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use mc_client::{Config, MoncreneauClient, ListAppointmentsParams, AppointmentStatus};
  /// # async fn run() -> mc_client::Result<()> {
  /// # let client = MoncreneauClient::new(Config::new("mk_test_abc123"))?;
  /// let params = ListAppointmentsParams::new().page(0, 20).status(AppointmentStatus::Scheduled);
  /// let page = client.appointments().list(Some(&params)).await?;
  /// for appointment in page.iter() {
  ///   println!("{} {}", appointment.date_time, appointment.name);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params))]
  pub async fn list(&self, params: Option<&ListAppointmentsParams>) -> Result<AppointmentPage> {
    match params {
      Some(params) => self.transport.get_with_query(COLLECTION, params).await,
      None => self.transport.get(COLLECTION).await,
    }
  }

  /// Cancel an appointment
  ///
  /// An empty or dot-only `id` is refused with `Error::InvalidInput`.
  #[instrument(skip(self))]
  pub async fn cancel(&self, id: &str) -> Result<()> {
    self.transport.delete(&resource_path(COLLECTION, &[id])?).await?;
    info!("Cancelled appointment {}", id);
    Ok(())
  }
}

impl_endpoint_base!(AppointmentEndpoints);
