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

//! Loads a NASR release and prints what was found.
//!
//! ```sh
//! # from a configuration file
//! nasr --config nasr.toml
//!
//! # or from individual files, dumping the catalog as JSON
//! nasr --aixm APT_AIXM.xml --apt APT.txt --json > catalog.json
//! ```

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use nasr::{Catalog, Config};
use nasr_legacy::Family;

/// Load FAA NASR AIXM, d-TPP and legacy text files
#[derive(Parser)]
#[command(name = "nasr", version, about, long_about = None)]
struct Cli {
    /// TOML file listing the input files
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// AIXM 5.1 subscriber file, may be repeated
    #[arg(long)]
    aixm: Vec<PathBuf>,

    /// d-TPP metafile
    #[arg(long)]
    dtpp: Option<PathBuf>,

    /// Legacy APT.txt
    #[arg(long)]
    apt: Option<PathBuf>,

    /// Legacy FIX.txt
    #[arg(long)]
    fix: Option<PathBuf>,

    /// Legacy AWOS.txt
    #[arg(long)]
    awos: Option<PathBuf>,

    /// Print the catalog as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Returns the configuration file, if any, with the command line files
    /// on top.
    fn config(&self) -> Result<Config, nasr::Error> {
        let mut config = match &self.config {
            Some(path) => Config::read(path)?,
            None => Config::default(),
        };

        config.aixm.extend(self.aixm.iter().cloned());
        let overrides = [
            (&mut config.dtpp, &self.dtpp),
            (&mut config.apt, &self.apt),
            (&mut config.fix, &self.fix),
            (&mut config.awos, &self.awos),
        ];
        for (target, path) in overrides {
            if path.is_some() {
                target.clone_from(path);
            }
        }

        Ok(config)
    }
}

fn print_summary(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "airports:   {}", catalog.airports().len())?;
    writeln!(out, "runways:    {}", catalog.runways().len())?;
    writeln!(out, "channels:   {}", catalog.channels().len())?;
    writeln!(out, "procedures: {}", catalog.procedures().len())?;
    if let Some(cycle) = catalog.cycle() {
        writeln!(out, "d-TPP cycle {}", cycle.cycle)?;
    }
    for family in [Family::Apt, Family::Fix, Family::Awos] {
        let records = catalog.legacy(family);
        if !records.is_empty() {
            writeln!(out, "{family}: {} records", records.len())?;
        }
    }
    if !catalog.errors().is_empty() {
        writeln!(out, "errors:     {}", catalog.errors().len())?;
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.config()?;
    let catalog = Catalog::load(&config);

    for e in catalog.errors() {
        log::warn!("{e}");
    }

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &catalog)?;
        writeln!(out)?;
    } else {
        print_summary(&catalog, &mut out)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
