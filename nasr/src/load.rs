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

//! Reading NASR files into a catalog.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use faa_aixm::{
    AirportDecoder, AtcServiceDecoder, CycleDecoder, Dispatcher, Namespaces, ProcedureDecoder,
    RadioChannelDecoder, RunwayDecoder, Summary, TouchdownLiftoffDecoder,
};
use log::{info, warn};
use nasr_legacy::{Family, Records};

use crate::{Catalog, CatalogBuilder, Config, Error};

impl CatalogBuilder {
    /// Adds the airports, runways, radio channels, touchdown/liftoff
    /// annotations and air traffic control services of an AIXM document.
    ///
    /// # Errors
    ///
    /// Returns an error if a namespace alias is missing or the document is
    /// not well formed. Records read up to that point are kept.
    pub fn load_aixm<R: BufRead>(&mut self, ns: &Namespaces, reader: R) -> Result<Summary, Error> {
        let builder = RefCell::new(self);
        let mut dispatcher = Dispatcher::new();

        dispatcher.register(AirportDecoder::new(ns)?, |arpt| {
            builder.borrow_mut().add_airport(arpt);
            Ok(())
        });
        dispatcher.register(RunwayDecoder::new(ns)?, |rwy| {
            builder.borrow_mut().add_runway(rwy);
            Ok(())
        });
        dispatcher.register(RadioChannelDecoder::new(ns)?, |channel| {
            builder.borrow_mut().add_channel(channel);
            Ok(())
        });
        dispatcher.register(TouchdownLiftoffDecoder::new(ns)?, |patch| {
            builder.borrow_mut().merge_touchdown(patch);
            Ok(())
        });
        dispatcher.register(AtcServiceDecoder::new(ns)?, |service| {
            builder.borrow_mut().link_service(service);
            Ok(())
        });

        let summary = dispatcher.run(reader)?;
        if summary.failures() > 0 {
            warn!("{} AIXM features could not be decoded", summary.failures());
        }
        Ok(summary)
    }

    /// Adds the terminal procedures and the cycle of a d-TPP metafile.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well formed.
    pub fn load_dtpp<R: BufRead>(&mut self, reader: R) -> Result<Summary, Error> {
        let builder = RefCell::new(self);
        let mut dispatcher = Dispatcher::new();

        dispatcher.register(CycleDecoder::new(), |cycle| {
            builder.borrow_mut().set_cycle(cycle);
            Ok(())
        });
        dispatcher.register(ProcedureDecoder::new(), |procedures| {
            builder.borrow_mut().add_procedures(procedures);
            Ok(())
        });

        Ok(dispatcher.run(reader)?)
    }

    /// Adds the records of a legacy text product and returns their number.
    /// Lines that were skipped are collected as errors.
    pub fn load_legacy(&mut self, family: Family, text: &str) -> usize {
        let mut records = Records::new(family, text);
        let mut count = 0;

        for record in records.by_ref() {
            self.add_legacy(family, record);
            count += 1;
        }
        for e in records.skipped() {
            self.add_error(e.clone());
        }

        count
    }

    fn load_aixm_file(&mut self, ns: &Namespaces, path: &Path) -> Result<(), Error> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let summary = self.load_aixm(ns, BufReader::new(file))?;
        info!("{}: {} AIXM features", path.display(), summary.total());
        Ok(())
    }

    fn load_dtpp_file(&mut self, path: &Path) -> Result<(), Error> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let summary = self.load_dtpp(BufReader::new(file))?;
        info!("{}: {} d-TPP airports", path.display(), summary.total());
        Ok(())
    }

    fn load_legacy_file(&mut self, family: Family, path: &Path) -> Result<(), Error> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let count = self.load_legacy(family, &String::from_utf8_lossy(&bytes));
        info!("{}: {count} {family} records", path.display());
        Ok(())
    }
}

impl Catalog {
    /// Loads all files of the configuration.
    ///
    /// A file that can't be read or parsed does not stop the others from
    /// being loaded; its error is collected in [`Catalog::errors`].
    pub fn load(config: &Config) -> Catalog {
        let ns = config.namespaces();
        let mut builder = CatalogBuilder::new();

        for path in &config.aixm {
            if let Err(e) = builder.load_aixm_file(&ns, path) {
                warn!("{e}");
                builder.add_error(e);
            }
        }

        if let Some(path) = &config.dtpp {
            if let Err(e) = builder.load_dtpp_file(path) {
                warn!("{e}");
                builder.add_error(e);
            }
        }

        for (family, path) in config.legacy() {
            if let Err(e) = builder.load_legacy_file(family, path) {
                warn!("{e}");
                builder.add_error(e);
            }
        }

        builder.build()
    }
}
