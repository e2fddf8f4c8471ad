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

use std::error;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A file could not be read.
    Io { path: PathBuf, reason: String },
    /// The configuration is not valid TOML or has unknown keys.
    Config(String),
    Aixm(faa_aixm::Error),
    Legacy(nasr_legacy::Error),
    /// No runway matches a touchdown/liftoff annotation.
    UnresolvedAnnotation {
        designator: String,
        airport_id: Option<String>,
    },
    /// An air traffic control service references an unknown radio channel.
    UnresolvedService { service: String, channel: String },
}

impl Error {
    pub(crate) fn io(path: &Path, e: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read {}: {reason}", path.display()),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Aixm(e) => write!(f, "{e}"),
            Self::Legacy(e) => write!(f, "{e}"),
            Self::UnresolvedAnnotation {
                designator,
                airport_id,
            } => write!(
                f,
                "no runway {designator} at airport {} for touchdown/liftoff annotation",
                airport_id.as_deref().unwrap_or("?")
            ),
            Self::UnresolvedService { service, channel } => {
                write!(f, "service {service} references unknown radio channel {channel}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Aixm(e) => Some(e),
            Self::Legacy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<faa_aixm::Error> for Error {
    fn from(e: faa_aixm::Error) -> Self {
        Self::Aixm(e)
    }
}

impl From<nasr_legacy::Error> for Error {
    fn from(e: nasr_legacy::Error) -> Self {
        Self::Legacy(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
