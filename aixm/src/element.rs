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

//! In-memory XML subtree handed to decoders.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::NsReader;

use crate::{Error, Tag};

/// An element with its attributes, text and child elements.
///
/// Only the subtree of a tracked element is ever materialised; everything
/// outside is dropped by the [`Dispatcher`](crate::Dispatcher) as soon as it
/// has been read.
#[derive(Clone, PartialEq, Debug)]
pub struct Element {
    tag: Tag,
    attributes: Vec<(Tag, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Parses a complete document and returns its root element.
    ///
    /// Meant for small documents and single fragments. Large documents
    /// should be streamed through a [`Dispatcher`](crate::Dispatcher).
    ///
    /// # Errors
    ///
    /// Returns an error if the XML is not well formed or empty.
    pub fn parse<R: BufRead>(source: R) -> Result<Self, Error> {
        let mut reader = reader(source);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => stack.push(open(&reader, &e)?),
                Event::End(_) => {
                    let element = stack.pop().ok_or(Error::MissingField("start tag"))?;
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.push_text(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(top) = stack.last_mut() {
                        top.push_text(&String::from_utf8_lossy(&c));
                    }
                }
                Event::Eof => return Err(Error::MissingField("root element")),
                _ => {}
            }
        }
    }

    pub fn with_attribute(mut self, name: Tag, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the value of the attribute `name`.
    pub fn attribute(&self, name: &Tag) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&Tag, &str)> {
        self.attributes.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Returns the element's own text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text of this element and all its descendants in document
    /// order, separated by single spaces.
    pub fn all_text(&self) -> String {
        let mut pieces = Vec::new();
        for element in self.iter() {
            let text = element.text.trim();
            if !text.is_empty() {
                pieces.push(text);
            }
        }
        pieces.join(" ")
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Element> {
        self.children
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    /// Returns the first direct child named `tag`.
    pub fn find(&self, tag: &Tag) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == *tag)
    }

    /// Iterates over this element and all its descendants, depth first.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if !self.text.is_empty() && !text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}

/// Depth-first iterator created by [`Element::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Creates a namespace aware reader that reports empty elements as a start
/// and an end event.
pub(crate) fn reader<R: BufRead>(source: R) -> NsReader<R> {
    let mut reader = NsReader::from_reader(source);
    let config = reader.config_mut();
    config.trim_text(true);
    config.expand_empty_elements = true;
    reader
}

/// Creates an element with the resolved name and attributes of a start tag.
///
/// Namespace declarations are not kept as attributes.
pub(crate) fn open<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> Result<Element, Error> {
    let (ns, local) = reader.resolve_element(start.name());
    let mut element = Element::new(Tag::resolved(ns, local.as_ref()));

    for attr in start.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        let (ns, local) = reader.resolve_attribute(attr.key);
        let name = Tag::resolved(ns, local.as_ref());
        element.attributes.push((name, attr.unescape_value()?.into_owned()));
    }

    Ok(element)
}
