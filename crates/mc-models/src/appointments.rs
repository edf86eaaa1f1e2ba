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

//! Appointment models
//!
//! Covers the appointment resource itself, the request body used to book one,
//! and the filters accepted when listing appointments.

use crate::common::Page;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
  /// Booked, waiting for payment
  PendingPayment,
  /// Confirmed and upcoming
  Scheduled,
  /// Took place
  Completed,
  /// Cancelled by the requester or the department
  Cancelled,
  /// Requester did not show up
  NoShow,
}

impl AppointmentStatus {
  /// Wire representation of the status
  pub fn as_str(&self) -> &'static str {
    match self {
      AppointmentStatus::PendingPayment => "PENDING_PAYMENT",
      AppointmentStatus::Scheduled => "SCHEDULED",
      AppointmentStatus::Completed => "COMPLETED",
      AppointmentStatus::Cancelled => "CANCELLED",
      AppointmentStatus::NoShow => "NO_SHOW",
    }
  }
}

impl fmt::Display for AppointmentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An appointment as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
  /// Appointment identifier
  pub id: String,

  /// Department the appointment is booked with
  pub department_id: i64,

  /// Scheduled date and time (ISO-8601)
  pub date_time: String,

  /// Current status
  pub status: AppointmentStatus,

  /// Name of the person the appointment is for
  pub name: String,

  /// Token encoded in the appointment's QR code
  pub qr_code: String,

  /// Creation timestamp (ISO-8601)
  pub created_at: String,

  /// Credits consumed by the booking
  pub credits_consumed: i64,

  /// Caller-side identifier of the requester
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_user_id: Option<String>,
}

/// Paginated list of appointments
pub type AppointmentPage = Page<Appointment>;

/// Body of `POST /appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
  /// Department to book with
  pub department_id: i64,

  /// Requested slot (ISO-8601)
  pub date_time: String,

  /// Name of the person the appointment is for
  pub name: String,

  /// Caller-side identifier of the requester
  #[serde(skip_serializing_if = "Option::is_none")]
  pub external_user_id: Option<String>,

  /// Specific worker to book with
  #[serde(skip_serializing_if = "Option::is_none")]
  pub worker_id: Option<i64>,
}

impl CreateAppointmentRequest {
  /// Request for `name` at `date_time` in department `department_id`
  pub fn new(department_id: i64, date_time: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      department_id,
      date_time: date_time.into(),
      name: name.into(),
      external_user_id: None,
      worker_id: None,
    }
  }

  /// Attach the caller's own identifier for the requester
  pub fn with_external_user_id(mut self, external_user_id: impl Into<String>) -> Self {
    self.external_user_id = Some(external_user_id.into());
    self
  }

  /// Book with a specific worker
  pub fn with_worker_id(mut self, worker_id: i64) -> Self {
    self.worker_id = Some(worker_id);
    self
  }
}

/// Filters and paging for `GET /appointments`
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsParams {
  /// Zero-based page index
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,

  /// Page size
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<u32>,

  /// Only appointments in this status
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<AppointmentStatus>,

  /// Only appointments for this department
  #[serde(skip_serializing_if = "Option::is_none")]
  pub department_id: Option<i64>,

  /// Earliest appointment date (inclusive)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<NaiveDate>,

  /// Latest appointment date (inclusive)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<NaiveDate>,
}

impl ListAppointmentsParams {
  /// Empty filter set
  pub fn new() -> Self {
    Self::default()
  }

  /// Select a page and page size
  pub fn page(mut self, page: u32, size: u32) -> Self {
    self.page = Some(page);
    self.size = Some(size);
    self
  }

  /// Filter by status
  pub fn status(mut self, status: AppointmentStatus) -> Self {
    self.status = Some(status);
    self
  }

  /// Filter by department
  pub fn department_id(mut self, department_id: i64) -> Self {
    self.department_id = Some(department_id);
    self
  }

  /// Filter by date range
  pub fn between(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
    self.start_date = Some(start_date);
    self.end_date = Some(end_date);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_appointment_deserialization() {
    let json = json!({
      "id": "apt_7f3a",
      "departmentId": 12,
      "dateTime": "2025-01-15T10:00:00",
      "status": "PENDING_PAYMENT",
      "name": "Mamadou Diallo",
      "qrCode": "QR-7F3A",
      "createdAt": "2025-01-10T08:30:00",
      "creditsConsumed": 1
    });

    let appointment: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(appointment.id, "apt_7f3a");
    assert_eq!(appointment.department_id, 12);
    assert_eq!(appointment.status, AppointmentStatus::PendingPayment);
    assert_eq!(appointment.credits_consumed, 1);
    assert!(appointment.external_user_id.is_none());
  }

  #[test]
  fn test_unknown_status_is_rejected() {
    let json = json!({
      "id": "apt_1",
      "departmentId": 1,
      "dateTime": "2025-01-15T10:00:00",
      "status": "RESCHEDULED",
      "name": "A",
      "qrCode": "Q",
      "createdAt": "2025-01-10T08:30:00",
      "creditsConsumed": 0
    });

    assert!(serde_json::from_value::<Appointment>(json).is_err());
  }

  #[test]
  fn test_status_wire_names() {
    assert_eq!(serde_json::to_value(AppointmentStatus::NoShow).unwrap(), json!("NO_SHOW"));
    assert_eq!(AppointmentStatus::Scheduled.to_string(), "SCHEDULED");
    let parsed: AppointmentStatus = serde_json::from_value(json!("CANCELLED")).unwrap();
    assert_eq!(parsed, AppointmentStatus::Cancelled);
  }

  #[test]
  fn test_create_request_omits_unset_fields() {
    let request = CreateAppointmentRequest::new(12, "2025-01-15T10:00:00", "Mamadou Diallo");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
      value,
      json!({ "departmentId": 12, "dateTime": "2025-01-15T10:00:00", "name": "Mamadou Diallo" })
    );

    let value =
      serde_json::to_value(request.with_external_user_id("user-42").with_worker_id(3)).unwrap();
    assert_eq!(value["externalUserId"], "user-42");
    assert_eq!(value["workerId"], 3);
  }

  #[test]
  fn test_list_params_serialization() {
    let params = ListAppointmentsParams::new()
      .page(2, 10)
      .status(AppointmentStatus::Scheduled)
      .between(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
      );

    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(
      value,
      json!({
        "page": 2,
        "size": 10,
        "status": "SCHEDULED",
        "startDate": "2025-01-01",
        "endDate": "2025-01-31"
      })
    );

    assert_eq!(serde_json::to_value(ListAppointmentsParams::new()).unwrap(), json!({}));
  }
}
