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

//! Common structures shared by several Moncreneau API responses

use serde::{Deserialize, Serialize};

/// One page of a paginated collection
///
/// Only the raw metadata returned by the server is exposed; fetching further
/// pages is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  /// Items on this page
  pub content: Vec<T>,

  /// Zero-based page index
  pub page: u32,

  /// Requested page size
  pub size: u32,

  /// Number of items across all pages
  pub total_elements: u64,

  /// Number of pages for the query
  pub total_pages: u32,

  /// Whether this is the final page
  pub last: bool,
}

impl<T> Page<T> {
  /// Whether the server reports more pages after this one
  pub fn has_next(&self) -> bool {
    !self.last
  }

  /// Whether this page carries no items
  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }

  /// Number of items on this page
  pub fn len(&self) -> usize {
    self.content.len()
  }

  /// Iterate over the items on this page
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.content.iter()
  }
}

impl<T> IntoIterator for Page<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.content.into_iter()
  }
}

/// A `{start, end}` pair of wall-clock times, e.g. `08:00`-`12:00`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
  /// Opening time (`HH:MM`)
  pub start: String,

  /// Closing time (`HH:MM`)
  pub end: String,
}
