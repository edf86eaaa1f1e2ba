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

//! # mc-models
//!
//! Data models for Moncreneau API requests and responses.
//!
//! Every type mirrors the JSON shape used on the wire (camelCase field names)
//! and derives `Serialize`/`Deserialize`, so the same structs serve both as
//! request bodies and decoded responses.
//!
//! ## Usage
//!
//! ```ignore
//! use mc_models::appointments::Appointment;
//! use mc_models::departments::Department;
//!
//! let appointment: Appointment = serde_json::from_str(&response_json)?;
//! let departments: Vec<Department> = serde_json::from_str(&list_json)?;
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod appointments;
pub mod common;
pub mod departments;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use appointments::*;
pub use departments::*;
