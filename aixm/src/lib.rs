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

//! Streaming decoder for the FAA NASR AIXM 5.1 subscriber files and the
//! d-TPP terminal procedures metafile.
//!
//! Documents are read in a single forward pass by a [`Dispatcher`]. Each
//! registered [`Decoder`] receives the subtree of its root element once the
//! element closes (or its attributes once it opens, for start hooks) and the
//! decoded record is handed to a sink right away. Memory use is bounded by
//! the largest tracked subtree, not by the document.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use faa_aixm::{AirportDecoder, Dispatcher, Namespaces};
//!
//! let ns = Namespaces::faa();
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(AirportDecoder::new(&ns)?, |airport| {
//!     println!("{} {:?}", airport.id, airport.name);
//!     Ok(())
//! });
//!
//! let file = BufReader::new(File::open("APT_AIXM.xml")?);
//! let summary = dispatcher.run(file)?;
//! println!("{} airports", summary.total());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coerce;
mod decoder;
mod decoders;
mod dispatcher;
mod element;
mod error;
mod namespaces;
mod records;

pub use decoder::{Decoder, Hook};
pub use decoders::*;
pub use dispatcher::{Dispatcher, Summary};
pub use element::{Element, Iter};
pub use error::Error;
pub use namespaces::{Namespaces, Tag, FAA_NAMESPACES};
pub use records::*;
