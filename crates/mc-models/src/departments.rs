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

//! Department and availability models

use crate::common::TimeRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A department appointments can be booked with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
  /// Department identifier
  pub id: i64,

  /// Display name
  pub name: String,

  /// Free-text description, when the department has one
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Length of one slot in minutes
  pub slot_duration: i64,

  /// Whether the department currently accepts bookings
  pub is_active: bool,

  /// Opening hours keyed by weekday, each day an ordered list of ranges
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub opening_hours: Option<BTreeMap<String, Vec<TimeRange>>>,
}

impl Department {
  /// Opening ranges for `weekday` (as keyed by the server, e.g. `MONDAY`)
  pub fn hours_for(&self, weekday: &str) -> &[TimeRange] {
    self
      .opening_hours
      .as_ref()
      .and_then(|hours| hours.get(weekday))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }
}

/// Bookable slots of a department over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
  /// Department the slots belong to
  pub department_id: i64,

  /// One entry per day, in date order
  pub availability: Vec<DayAvailability>,
}

impl Availability {
  /// All slots still open for booking, across every day
  pub fn open_slots(&self) -> impl Iterator<Item = &Slot> {
    self.availability.iter().flat_map(|day| day.open_slots())
  }

  /// Availability for a single day
  pub fn day(&self, date: NaiveDate) -> Option<&DayAvailability> {
    self.availability.iter().find(|d| d.date == date)
  }
}

/// Slots of a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
  /// Calendar day the slots fall on
  pub date: NaiveDate,

  /// Every slot of the day, booked ones included
  pub slots: Vec<Slot>,
}

impl DayAvailability {
  /// Slots of this day still open for booking
  pub fn open_slots(&self) -> impl Iterator<Item = &Slot> {
    self.slots.iter().filter(|s| s.available)
  }
}

/// A single slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
  /// Wall-clock start time (`HH:MM`)
  pub time: String,

  /// Whether the slot can still be booked
  pub available: bool,

  /// Full timestamp of the slot, usable as `CreateAppointmentRequest::date_time`
  pub date_time: String,
}

/// Query of `GET /departments/{id}/availability`; both bounds are required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailabilityParams {
  /// First day of the range
  pub start_date: NaiveDate,

  /// Last day of the range
  pub end_date: NaiveDate,
}

impl GetAvailabilityParams {
  /// Query for the days from `start_date` through `end_date`
  pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
    Self { start_date, end_date }
  }
}
