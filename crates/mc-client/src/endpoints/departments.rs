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

//! `/departments` endpoints: list, look up and query availability

use super::{EndpointBase, impl_endpoint_base, resource_path};
use crate::transport::HttpClient;
use mc_core::Result;
use mc_models::departments::{Availability, Department, GetAvailabilityParams};
use std::sync::Arc;
use tracing::instrument;

const COLLECTION: &str = "/departments";

/// Department endpoints
#[derive(Debug, Clone)]
pub struct DepartmentEndpoints {
  transport: Arc<HttpClient>,
}

impl DepartmentEndpoints {
  /// Create a new department endpoints instance
  pub fn new(transport: Arc<HttpClient>) -> Self {
    Self { transport }
  }

  /// List all departments
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Department>> {
    self.transport.get(COLLECTION).await
  }

  /// Retrieve a department by ID
  #[instrument(skip(self))]
  pub async fn retrieve(&self, id: i64) -> Result<Department> {
    self.transport.get(&resource_path(COLLECTION, &[&id.to_string()])?).await
  }

  /// Get bookable slots of a department between two dates
  ///
  /// # Arguments
  ///
  /// * `id` - Department ID
  /// * `params` - Inclusive date range, sent as `startDate`/`endDate`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use mc_client::{Config, MoncreneauClient, GetAvailabilityParams};
  /// # use chrono::NaiveDate;
  /// # async fn run() -> mc_client::Result<()> {
  /// # let client = MoncreneauClient::new(Config::new("mk_test_abc123"))?;
  /// let range = GetAvailabilityParams::new(
  ///   NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
  ///   NaiveDate::from_ymd_opt(2025, 1, 22).unwrap(),
  /// );
  /// let availability = client.departments().get_availability(12, &range).await?;
  /// for slot in availability.open_slots() {
  ///   println!("{}", slot.date_time);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params))]
  pub async fn get_availability(
    &self,
    id: i64,
    params: &GetAvailabilityParams,
  ) -> Result<Availability> {
    let path = resource_path(COLLECTION, &[&id.to_string(), "availability"])?;
    self.transport.get_with_query(&path, params).await
  }
}

impl_endpoint_base!(DepartmentEndpoints);
