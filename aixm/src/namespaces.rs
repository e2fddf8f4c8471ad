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

//! Namespace aliases and qualified element names.
//!
//! Element and attribute names are compared in Clark notation,
//! `{namespace-uri}local-name`, which is what the streaming reader resolves
//! every prefixed name to. Names without a namespace are kept as their bare
//! local name.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use quick_xml::name::{Namespace, ResolveResult};
use serde::Serialize;

use crate::Error;

/// Namespaces used by the FAA NASR AIXM 5.1 subscriber files.
pub const FAA_NAMESPACES: &[(&str, &str)] = &[
    ("faa", "http://www.faa.gov/aixm5.1"),
    ("apt", "http://www.faa.gov/aixm5.1/apt"),
    ("gml", "http://www.opengis.net/gml/3.2"),
    ("xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("aixm", "http://www.aixm.aero/schema/5.1"),
    ("gmd", "http://www.isotc211.org/2005/gmd"),
    ("gco", "http://www.isotc211.org/2005/gco"),
    ("xlink", "http://www.w3.org/1999/xlink"),
];

/// A qualified element or attribute name.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct Tag(String);

impl Tag {
    /// Creates a name that is not bound to any namespace.
    pub fn local(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Creates a name bound to the namespace `uri`.
    pub fn qualified(uri: &str, local: &str) -> Self {
        Self(format!("{{{uri}}}{local}"))
    }

    /// Creates a name from the reader's namespace resolution.
    pub(crate) fn resolved(ns: ResolveResult<'_>, local: &[u8]) -> Self {
        let local = String::from_utf8_lossy(local);
        match ns {
            ResolveResult::Bound(Namespace(uri)) => {
                Self::qualified(&String::from_utf8_lossy(uri), &local)
            }
            // an undeclared prefix is matched by its local part only
            ResolveResult::Unbound | ResolveResult::Unknown(_) => Self(local.into_owned()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name without its namespace.
    pub fn local_name(&self) -> &str {
        self.0.rsplit_once('}').map_or(&self.0, |(_, local)| local)
    }

    /// Returns the namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'))
            .map(|(uri, _)| uri)
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Alias table that qualifies local names.
///
/// The table is built once, before any decoder, and handed to each decoder
/// constructor. Decoders resolve all their tags up front, so a missing alias
/// surfaces as [`Error::UnknownNamespaceAlias`] while wiring the dispatcher
/// and never while reading a document.
///
/// # Examples
///
/// ```
/// use faa_aixm::Namespaces;
///
/// let ns = Namespaces::faa();
/// let tag = ns.qualify("aixm", "AirportHeliport").unwrap();
/// assert_eq!(tag.as_str(), "{http://www.aixm.aero/schema/5.1}AirportHeliport");
/// assert!(ns.qualify("foo", "bar").is_err());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Namespaces {
    aliases: BTreeMap<String, String>,
}

impl Namespaces {
    /// An empty table.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// The FAA AIXM table, see [`FAA_NAMESPACES`].
    pub fn faa() -> Self {
        FAA_NAMESPACES
            .iter()
            .fold(Self::empty(), |ns, (alias, uri)| ns.with_alias(*alias, *uri))
    }

    /// Registers `alias`, replacing any previous URI.
    pub fn with_alias(mut self, alias: impl Into<String>, uri: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), uri.into());
        self
    }

    pub fn uri(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Qualifies `local` with the namespace registered as `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNamespaceAlias`] if the alias is not registered.
    pub fn qualify(&self, alias: &str, local: &str) -> Result<Tag, Error> {
        self.uri(alias)
            .map(|uri| Tag::qualified(uri, local))
            .ok_or_else(|| Error::UnknownNamespaceAlias(alias.to_owned()))
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::faa()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_registered_alias() {
        let ns = Namespaces::faa();
        let tag = ns.qualify("apt", "lightingSchedule").expect("alias should exist");
        assert_eq!(tag.namespace(), Some("http://www.faa.gov/aixm5.1/apt"));
        assert_eq!(tag.local_name(), "lightingSchedule");
    }

    #[test]
    fn unknown_alias_fails() {
        assert_eq!(
            Namespaces::faa().qualify("aixm52", "Runway"),
            Err(Error::UnknownNamespaceAlias("aixm52".to_string()))
        );
    }

    #[test]
    fn override_alias() {
        let ns = Namespaces::faa().with_alias("aixm", "http://www.aixm.aero/schema/5.2");
        assert_eq!(
            ns.qualify("aixm", "Runway").map(|t| t.to_string()),
            Ok("{http://www.aixm.aero/schema/5.2}Runway".to_string())
        );
    }

    #[test]
    fn local_tag_has_no_namespace() {
        let tag = Tag::local("airport_name");
        assert_eq!(tag.namespace(), None);
        assert_eq!(tag.local_name(), "airport_name");
    }
}
