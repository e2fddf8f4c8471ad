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

//! Input files and namespace aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use faa_aixm::Namespaces;
use nasr_legacy::Family;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which files to load.
///
/// Read from TOML, e.g.
///
/// ```toml
/// aixm = ["APT_AIXM.xml"]
/// dtpp = "d-TPP_Metafile.xml"
/// apt = "APT.txt"
///
/// [namespaces]
/// apt = "http://www.faa.gov/aixm5.1/apt"
/// ```
///
/// Entries in `namespaces` are registered on top of the FAA aliases.
#[derive(Clone, Default, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub aixm: Vec<PathBuf>,
    pub dtpp: Option<PathBuf>,
    pub apt: Option<PathBuf>,
    pub fix: Option<PathBuf>,
    pub awos: Option<PathBuf>,
    pub namespaces: BTreeMap<String, String>,
}

impl Config {
    /// # Errors
    ///
    /// Returns an error if `s` is not valid or has unknown keys.
    pub fn from_toml(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the configuration file at `path`. Relative file names are
    /// resolved against the directory of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not valid.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml(&s)?;

        Ok(match path.parent() {
            Some(base) => config.resolve(base),
            None => config,
        })
    }

    fn resolve(mut self, base: &Path) -> Self {
        let join = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        self.aixm.iter_mut().for_each(join);
        [&mut self.dtpp, &mut self.apt, &mut self.fix, &mut self.awos]
            .into_iter()
            .flatten()
            .for_each(join);
        self
    }

    /// Returns the FAA aliases with the configured ones on top.
    pub fn namespaces(&self) -> Namespaces {
        self.namespaces
            .iter()
            .fold(Namespaces::faa(), |ns, (alias, uri)| {
                ns.with_alias(alias.as_str(), uri.as_str())
            })
    }

    /// Returns the configured legacy products.
    pub fn legacy(&self) -> impl Iterator<Item = (Family, &Path)> {
        [
            (Family::Apt, &self.apt),
            (Family::Fix, &self.fix),
            (Family::Awos, &self.awos),
        ]
        .into_iter()
        .filter_map(|(family, path)| path.as_deref().map(|path| (family, path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML: &str = r#"
        aixm = ["APT_AIXM.xml", "/data/AWOS_AIXM.xml"]
        fix = "FIX.txt"

        [namespaces]
        apt = "http://www.faa.gov/aixm5.1/apt/2"
    "#;

    #[test]
    fn reads_toml() {
        let config = Config::from_toml(TOML).unwrap();
        assert_eq!(config.aixm.len(), 2);
        assert_eq!(config.fix, Some(PathBuf::from("FIX.txt")));
        assert_eq!(config.dtpp, None);

        let legacy: Vec<_> = config.legacy().collect();
        assert_eq!(legacy, [(Family::Fix, Path::new("FIX.txt"))]);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml("nav = \"NAV.txt\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn overrides_namespaces() {
        let ns = Config::from_toml(TOML).unwrap().namespaces();
        assert_eq!(ns.uri("apt"), Some("http://www.faa.gov/aixm5.1/apt/2"));
        assert_eq!(ns.uri("aixm"), Some("http://www.aixm.aero/schema/5.1"));
    }

    #[test]
    fn resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nasr.toml");
        std::fs::write(&path, TOML).unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.aixm[0], dir.path().join("APT_AIXM.xml"));
        assert_eq!(config.aixm[1], PathBuf::from("/data/AWOS_AIXM.xml"));
        assert_eq!(config.fix, Some(dir.path().join("FIX.txt")));
    }
}
