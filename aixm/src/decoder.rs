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

use std::collections::HashMap;

use log::warn;

use crate::{Element, Error, Tag};

/// When a decoder runs relative to its root element.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Hook {
    /// On the opening tag, with the element's attributes only.
    Start,
    /// On the closing tag, with the complete subtree.
    End,
}

/// Turns the subtree of one root element into a record.
///
/// Decoders are immutable once built and never touch storage. The records
/// they produce are handed to a sink by the
/// [`Dispatcher`](crate::Dispatcher).
pub trait Decoder {
    type Record;

    /// The qualified name of the element this decoder handles.
    fn root(&self) -> &Tag;

    fn hook(&self) -> Hook {
        Hook::End
    }

    /// Decodes the element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element lacks the record's natural key.
    fn decode(&self, element: Element) -> Result<Self::Record, Error>;
}

/// Extracts one field of the record `R` from a child element, using the tags
/// resolved by the decoder `D`.
pub(crate) type Extractor<D, R> = fn(&D, &mut R, &Element) -> Result<(), Error>;

/// Maps qualified child tags to extractors.
pub(crate) struct FieldTable<D, R> {
    fields: HashMap<Tag, Extractor<D, R>>,
}

impl<D, R> FieldTable<D, R> {
    pub(crate) fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    pub(crate) fn field(mut self, tag: Tag, extract: Extractor<D, R>) -> Self {
        self.fields.insert(tag, extract);
        self
    }

    /// Runs the extractor registered for `child`.
    ///
    /// Returns `false` if the child's tag is not in the table. An extractor
    /// error is logged and leaves the field unset.
    pub(crate) fn apply(&self, decoder: &D, record: &mut R, child: &Element) -> bool {
        let Some(extract) = self.fields.get(child.tag()) else {
            return false;
        };

        if let Err(e) = extract(decoder, record, child) {
            warn!("skipping {}: {e}", child.tag().local_name());
        }

        true
    }

    /// Matches all descendants of `element` against the table. The subtree
    /// of a matched descendant is not visited again.
    pub(crate) fn apply_nested(&self, decoder: &D, record: &mut R, element: &Element) {
        for child in element.children() {
            if !self.apply(decoder, record, child) {
                self.apply_nested(decoder, record, child);
            }
        }
    }

    /// Matches the properties of a feature's time slice against the table.
    ///
    /// The properties are the children of
    /// `Feature/timeSlice/FeatureTimeSlice`. Each one is dropped as soon as
    /// its field was extracted.
    pub(crate) fn walk(&self, decoder: &D, record: &mut R, feature: Element) {
        for child in properties(feature) {
            self.apply(decoder, record, &child);
        }
    }
}

fn properties(feature: Element) -> Vec<Element> {
    let mut children = feature.into_children();
    let Some(index) = children
        .iter()
        .position(|child| child.tag().local_name() == "timeSlice")
    else {
        return Vec::new();
    };

    children
        .swap_remove(index)
        .into_children()
        .into_iter()
        .next()
        .map(Element::into_children)
        .unwrap_or_default()
}

/// Returns the trimmed text of the element, or `None` if it is empty.
pub(crate) fn text(element: &Element) -> Option<String> {
    let text = element.text().trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Like [`text`] but includes the text of all descendants.
pub(crate) fn all_text(element: &Element) -> Option<String> {
    let text = element.all_text();
    (!text.is_empty()).then_some(text)
}
