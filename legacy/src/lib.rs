// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! FAA NASR legacy text product parser.
//!
//! The legacy products are fixed-width text files with one record per line.
//! The first bytes of each line name the record type, which selects the
//! column layout used to slice and coerce the rest of the line. Each
//! [`Family`] knows the record types of one product.
//!
//! # Examples
//!
//! ```
//! use nasr_legacy::{Family, Records, Value};
//!
//! let mut line = format!("{:<125}", "ATT50009.*A");
//! line.replace_range(18..39, "ALL/ALL/ALL/0600-2300");
//!
//! for record in Records::new(Family::Apt, &line) {
//!     assert_eq!(record.kind, "ATT");
//!     assert_eq!(
//!         record.get("attendance_schedule"),
//!         Some(&Value::Text("ALL/ALL/ALL/0600-2300".to_string()))
//!     );
//! }
//! ```

#[macro_use]
mod macros;

pub mod coerce;
mod error;
mod layout;
mod records;
mod value;

pub use error::Error;
pub use layout::{Coerce, Column, Family};
pub use records::Records;
pub use value::{LegacyRecord, Value};
