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

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An XML parsing error from the underlying parser.
    Xml(String),
    /// A decoder table references a namespace alias that was never registered.
    UnknownNamespaceAlias(String),
    /// A non-empty value does not match the expected pattern.
    MalformedValue { field: &'static str, value: String },
    /// An href back-reference lacks its delimiter or closing quote.
    MalformedReference {
        href: String,
        delimiter: &'static str,
    },
    /// A required element or attribute is missing.
    MissingField(&'static str),
    /// Decoding a tracked element failed.
    DecoderFailure { tag: String, reason: String },
    /// The record sink refused a record.
    Sink(String),
}

impl Error {
    /// Wraps any displayable persistence error as [`Error::Sink`].
    pub fn sink<E: fmt::Display>(e: E) -> Self {
        Self::Sink(e.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::UnknownNamespaceAlias(alias) => {
                write!(f, "namespace alias \"{alias}\" is not registered")
            }
            Self::MalformedValue { field, value } => {
                write!(f, "malformed value for {field}: \"{value}\"")
            }
            Self::MalformedReference { href, delimiter } => {
                write!(f, "reference \"{href}\" has no \"{delimiter}\" delimiter")
            }
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::DecoderFailure { tag, reason } => {
                write!(f, "failed to decode {tag}: {reason}")
            }
            Self::Sink(e) => write!(f, "sink error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(e.to_string())
    }
}
