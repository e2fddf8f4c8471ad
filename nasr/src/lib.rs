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

//! FAA NASR release loader.
//!
//! Reads the AIXM subscriber files, the d-TPP metafile and the legacy text
//! products of one NASR release into a [`Catalog`]. The records are decoded
//! by [`faa_aixm`] and [`nasr_legacy`]; this crate resolves the references
//! between them:
//!
//! - touchdown/liftoff annotations are merged into the runway with the same
//!   designator and airport,
//! - air traffic control services set the airport of their radio channels.
//!
//! Both work regardless of the order in which the records appear.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nasr::{Catalog, Config};
//!
//! let config = Config::read(Path::new("nasr.toml"))?;
//! let catalog = Catalog::load(&config);
//!
//! for e in catalog.errors() {
//!     eprintln!("{e}");
//! }
//!
//! if let Some(arpt) = catalog.find_airport("PANC") {
//!     for rwy in catalog.runways_of(&arpt.id) {
//!         println!("{:?} {:?}", rwy.designator, rwy.true_bearing);
//!     }
//! }
//! # Ok::<(), nasr::Error>(())
//! ```

mod catalog;
mod config;
mod error;
mod load;

pub use catalog::{Catalog, CatalogBuilder};
pub use config::Config;
pub use error::Error;
