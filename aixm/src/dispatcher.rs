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

//! Single pass routing of tracked subtrees to their decoders.

use std::collections::HashMap;
use std::io::BufRead;

use log::{debug, error, trace, warn};
use quick_xml::events::Event;

use crate::element::{open, reader};
use crate::{Decoder, Element, Error, Hook, Tag};

enum Fault {
    Decode(Error),
    Sink(Error),
}

type Callback<'s> = Box<dyn FnMut(Element) -> Result<(), Fault> + 's>;

#[derive(Default)]
struct Hooks<'s> {
    start: Option<Callback<'s>>,
    end: Option<Callback<'s>>,
}

/// Counts of one [`Dispatcher::run`].
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Summary {
    records: HashMap<Tag, usize>,
    failures: usize,
    peak_open: usize,
}

impl Summary {
    /// Number of records the sink of `tag` received.
    pub fn count(&self, tag: &Tag) -> usize {
        self.records.get(tag).copied().unwrap_or_default()
    }

    /// Number of records all sinks received.
    pub fn total(&self) -> usize {
        self.records.values().sum()
    }

    /// Number of elements that failed to decode.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Largest number of tracked elements that were open at the same time.
    pub fn peak_open(&self) -> usize {
        self.peak_open
    }
}

/// A partially read element.
struct Open {
    element: Element,
    tracked: bool,
    /// Why the subtree could not be built, if it could not.
    poisoned: Option<String>,
}

/// Marks every tracked element that is still open as failed. Their decoders
/// won't run; each one is counted as a failure once it closes.
fn poison(stack: &mut [Open], reason: &Error, position: u64) {
    warn!("malformed content at byte {position}: {reason}");
    for open in stack.iter_mut().filter(|open| open.tracked) {
        open.poisoned.get_or_insert_with(|| reason.to_string());
    }
}

/// Streams a document and hands every registered element to its decoder.
///
/// Elements are read in one forward pass. Only the subtree of an element
/// with a registered end hook is built in memory; everything else is dropped
/// as soon as it has been read. Once a tracked element closes, its decoder
/// runs and the record goes straight to the sink before the next event is
/// read.
///
/// # Examples
///
/// ```
/// use faa_aixm::{Dispatcher, Namespaces, RunwayDecoder};
///
/// let xml = r#"
/// <message xmlns:aixm="http://www.aixm.aero/schema/5.1"
///          xmlns:gml="http://www.opengis.net/gml/3.2">
///   <aixm:Runway gml:id="RWY_1">
///     <aixm:timeSlice>
///       <aixm:RunwayTimeSlice>
///         <aixm:designator>18/36</aixm:designator>
///       </aixm:RunwayTimeSlice>
///     </aixm:timeSlice>
///   </aixm:Runway>
/// </message>"#;
///
/// let mut runways = Vec::new();
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(RunwayDecoder::new(&Namespaces::faa())?, |runway| {
///     runways.push(runway);
///     Ok(())
/// });
///
/// let summary = dispatcher.run(xml.as_bytes())?;
/// drop(dispatcher);
///
/// assert_eq!(summary.total(), 1);
/// assert_eq!(runways[0].designator.as_deref(), Some("18/36"));
/// # Ok::<(), faa_aixm::Error>(())
/// ```
#[derive(Default)]
pub struct Dispatcher<'s> {
    hooks: HashMap<Tag, Hooks<'s>>,
}

impl<'s> Dispatcher<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoder and the sink that receives its records.
    ///
    /// The decoder runs on the opening or the closing tag of its root,
    /// depending on its [`Hook`]. Registering a second decoder for the same
    /// root and hook replaces the first one.
    pub fn register<D, S>(&mut self, decoder: D, mut sink: S)
    where
        D: Decoder + 's,
        S: FnMut(D::Record) -> Result<(), Error> + 's,
    {
        let tag = decoder.root().clone();
        let hook = decoder.hook();

        let callback: Callback<'s> = Box::new(move |element| {
            let record = decoder.decode(element).map_err(Fault::Decode)?;
            sink(record).map_err(Fault::Sink)
        });

        let hooks = self.hooks.entry(tag.clone()).or_default();
        let slot = match hook {
            Hook::Start => &mut hooks.start,
            Hook::End => &mut hooks.end,
        };

        if slot.replace(callback).is_some() {
            warn!("replacing {hook:?} hook of {tag}");
        }
    }

    /// Reads the document and runs the registered decoders.
    ///
    /// An element that fails to decode, or whose subtree holds a malformed
    /// attribute or entity, is logged and counted in [`Summary::failures`],
    /// and the pass continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well formed or a sink refuses
    /// a record. Records delivered up to that point stay delivered.
    pub fn run<R: BufRead>(&mut self, source: R) -> Result<Summary, Error> {
        let mut reader = reader(source);
        let mut buf = Vec::new();
        let mut stack: Vec<Open> = Vec::new();
        let mut tracked = 0;
        let mut summary = Summary::default();

        loop {
            buf.clear();
            let position = reader.buffer_position();
            let event = match reader.read_event_into(&mut buf) {
                Ok(event) => event,
                Err(e) => {
                    error!("XML error at byte {}: {e}", reader.buffer_position());
                    return Err(e.into());
                }
            };

            match event {
                Event::Start(start) => {
                    let (ns, local) = reader.resolve_element(start.name());
                    let tag = Tag::resolved(ns, local.as_ref());
                    let hooks = self.hooks.get_mut(&tag);
                    let has_end = hooks.as_ref().is_some_and(|h| h.end.is_some());

                    // idle and nothing registered
                    if stack.is_empty() && hooks.is_none() {
                        continue;
                    }

                    let (element, malformed) = match open(&reader, &start) {
                        Ok(element) => (element, None),
                        Err(e) => (Element::new(tag.clone()), Some(e)),
                    };

                    if let Some(start_hook) = hooks.and_then(|h| h.start.as_mut()) {
                        if let Some(e) = &malformed {
                            fail(&tag, &e.to_string(), position, &mut summary);
                        } else {
                            trace!("start of {tag} at byte {position}");
                            fire(start_hook, element.clone(), &tag, position, &mut summary)?;
                        }
                    }

                    if has_end || !stack.is_empty() {
                        if has_end {
                            tracked += 1;
                            summary.peak_open = summary.peak_open.max(tracked);
                        }
                        stack.push(Open {
                            element,
                            tracked: has_end,
                            poisoned: None,
                        });
                        if let Some(e) = malformed {
                            poison(&mut stack, &e, position);
                        }
                    }
                }
                Event::End(_) => {
                    let Some(Open {
                        element,
                        tracked: is_tracked,
                        poisoned,
                    }) = stack.pop()
                    else {
                        continue;
                    };

                    if !is_tracked {
                        if let Some(parent) = stack.last_mut() {
                            parent.element.push_child(element);
                        }
                        continue;
                    }

                    tracked -= 1;
                    if let Some(reason) = poisoned {
                        fail(element.tag(), &reason, position, &mut summary);
                        continue;
                    }

                    if let Some(parent) = stack.last_mut() {
                        // a nested root stays part of its enclosing root
                        parent.element.push_child(element.clone());
                    }

                    let tag = element.tag().clone();
                    if let Some(end_hook) = self.hooks.get_mut(&tag).and_then(|h| h.end.as_mut()) {
                        trace!("end of {tag} at byte {position}");
                        fire(end_hook, element, &tag, position, &mut summary)?;
                    }
                }
                Event::Text(text) => {
                    if stack.is_empty() {
                        continue;
                    }
                    match text.unescape() {
                        Ok(text) => {
                            if let Some(top) = stack.last_mut() {
                                top.element.push_text(&text);
                            }
                        }
                        Err(e) => poison(&mut stack, &Error::from(e), position),
                    }
                }
                Event::CData(data) => {
                    if let Some(top) = stack.last_mut() {
                        top.element.push_text(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.first() {
            error!("document ended inside {}", open.element.tag());
            return Err(Error::Xml(format!(
                "unexpected end of document inside {}",
                open.element.tag()
            )));
        }

        debug!(
            "dispatched {} records, {} failures",
            summary.total(),
            summary.failures
        );
        Ok(summary)
    }
}

fn fire(
    callback: &mut Callback<'_>,
    element: Element,
    tag: &Tag,
    position: u64,
    summary: &mut Summary,
) -> Result<(), Error> {
    match callback(element) {
        Ok(()) => {
            *summary.records.entry(tag.clone()).or_default() += 1;
            Ok(())
        }
        Err(Fault::Decode(e)) => {
            fail(tag, &e.to_string(), position, summary);
            Ok(())
        }
        Err(Fault::Sink(e @ Error::Sink(_))) => Err(e),
        Err(Fault::Sink(e)) => Err(Error::sink(e)),
    }
}

fn fail(tag: &Tag, reason: &str, position: u64, summary: &mut Summary) {
    let failure = Error::DecoderFailure {
        tag: tag.local_name().to_owned(),
        reason: reason.to_owned(),
    };
    warn!("{failure} (byte {position})");
    summary.failures += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AirportDecoder, CycleDecoder, Namespaces, ProcedureDecoder, RunwayDecoder};

    const AIXM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
      <SubscriberFile xmlns:aixm="http://www.aixm.aero/schema/5.1"
                      xmlns:gml="http://www.opengis.net/gml/3.2"
                      xmlns:xlink="http://www.w3.org/1999/xlink">
        <Member>
          <aixm:AirportHeliport gml:id="AH_1">
            <aixm:timeSlice><aixm:AirportHeliportTimeSlice>
              <aixm:designator>ANC</aixm:designator>
            </aixm:AirportHeliportTimeSlice></aixm:timeSlice>
          </aixm:AirportHeliport>
        </Member>
        <Member>
          <aixm:Runway gml:id="RWY_1">
            <aixm:timeSlice><aixm:RunwayTimeSlice>
              <aixm:designator>07L/25R</aixm:designator>
            </aixm:RunwayTimeSlice></aixm:timeSlice>
          </aixm:Runway>
        </Member>
        <Member>
          <aixm:Runway>
            <aixm:timeSlice><aixm:RunwayTimeSlice>
              <aixm:designator>NO ID</aixm:designator>
            </aixm:RunwayTimeSlice></aixm:timeSlice>
          </aixm:Runway>
        </Member>
        <Member>
          <aixm:AirportHeliport gml:id="AH_2">
            <aixm:timeSlice><aixm:AirportHeliportTimeSlice>
              <aixm:designator>MRI</aixm:designator>
            </aixm:AirportHeliportTimeSlice></aixm:timeSlice>
          </aixm:AirportHeliport>
        </Member>
      </SubscriberFile>"#;

    #[test]
    fn one_record_per_close_event() {
        let ns = Namespaces::faa();
        let mut airports = Vec::new();
        let mut runways = Vec::new();

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AirportDecoder::new(&ns).unwrap(), |a| {
            airports.push(a.designator);
            Ok(())
        });
        dispatcher.register(RunwayDecoder::new(&ns).unwrap(), |r| {
            runways.push(r.id);
            Ok(())
        });

        let summary = dispatcher.run(AIXM.as_bytes()).unwrap();
        drop(dispatcher);

        assert_eq!(airports, [Some("ANC".to_string()), Some("MRI".to_string())]);
        assert_eq!(runways, ["RWY_1"]);
        assert_eq!(summary.count(&ns.qualify("aixm", "AirportHeliport").unwrap()), 2);
        assert_eq!(summary.count(&ns.qualify("aixm", "Runway").unwrap()), 1);
        assert_eq!(summary.failures(), 1);
        assert_eq!(summary.peak_open(), 1);
    }

    #[test]
    fn malformed_content_fails_only_its_element() {
        let xml = r#"
          <SubscriberFile xmlns:aixm="http://www.aixm.aero/schema/5.1"
                          xmlns:gml="http://www.opengis.net/gml/3.2">
            <aixm:AirportHeliport gml:id="AH_1">
              <aixm:timeSlice><aixm:AirportHeliportTimeSlice>
                <aixm:name>ANCHORAGE &bogus;</aixm:name>
              </aixm:AirportHeliportTimeSlice></aixm:timeSlice>
            </aixm:AirportHeliport>
            <aixm:AirportHeliport gml:id="AH&bogus;2">
              <aixm:timeSlice><aixm:AirportHeliportTimeSlice/></aixm:timeSlice>
            </aixm:AirportHeliport>
            <other>&bogus;</other>
            <aixm:AirportHeliport gml:id="AH_3">
              <aixm:timeSlice><aixm:AirportHeliportTimeSlice>
                <aixm:name>MERRILL FLD</aixm:name>
              </aixm:AirportHeliportTimeSlice></aixm:timeSlice>
            </aixm:AirportHeliport>
          </SubscriberFile>"#;
        let mut airports = Vec::new();

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AirportDecoder::new(&Namespaces::faa()).unwrap(), |a| {
            airports.push(a.id);
            Ok(())
        });

        let summary = dispatcher.run(xml.as_bytes()).unwrap();
        drop(dispatcher);

        assert_eq!(airports, ["AH_3"]);
        assert_eq!(summary.total(), 1);
        assert_eq!(summary.failures(), 2);
    }

    #[test]
    fn sink_error_aborts_run() {
        let ns = Namespaces::faa();
        let mut seen = 0;

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AirportDecoder::new(&ns).unwrap(), |_| {
            seen += 1;
            Err(Error::sink("database is locked"))
        });

        let result = dispatcher.run(AIXM.as_bytes());
        drop(dispatcher);

        assert_eq!(result, Err(Error::Sink("database is locked".to_string())));
        assert_eq!(seen, 1);
    }

    #[test]
    fn malformed_document_keeps_delivered_records() {
        let ns = Namespaces::faa();
        let broken = AIXM.replace("</SubscriberFile>", "</Member>");
        let mut airports = 0;

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(AirportDecoder::new(&ns).unwrap(), |_| {
            airports += 1;
            Ok(())
        });

        let result = dispatcher.run(broken.as_bytes());
        drop(dispatcher);

        assert!(matches!(result, Err(Error::Xml(_))));
        assert_eq!(airports, 2);
    }

    #[test]
    fn counts_nested_roots() {
        let xml = r#"<a><b><b><c>x</c></b></b><b/></a>"#;
        let mut texts = Vec::new();

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Text(Tag::local("b")), |text| {
            texts.push(text);
            Ok(())
        });

        let summary = dispatcher.run(xml.as_bytes()).unwrap();
        drop(dispatcher);

        assert_eq!(texts, ["x", "x", ""]);
        assert_eq!(summary.peak_open(), 2);
        assert_eq!(summary.count(&Tag::local("b")), 3);
    }

    #[test]
    fn start_hook_fires_before_records() {
        let xml = r#"
          <digital_tpp cycle="2410" from_edate="0901Z  10/03/24" to_edate="0901Z  10/31/24">
            <state_code ID="AK">
              <city_name ID="ANCHORAGE">
                <airport_name ID="TED STEVENS ANCHORAGE INTL" apt_ident="ANC">
                  <record><chart_name>TAKEOFF MINIMUMS</chart_name></record>
                </airport_name>
              </city_name>
            </state_code>
          </digital_tpp>"#;

        let events = std::cell::RefCell::new(Vec::new());

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(CycleDecoder::new(), |cycle| {
            events.borrow_mut().push(cycle.cycle);
            Ok(())
        });
        dispatcher.register(ProcedureDecoder::new(), |procedures| {
            for p in procedures {
                events.borrow_mut().push(p.chart_name.unwrap_or_default());
            }
            Ok(())
        });

        let summary = dispatcher.run(xml.as_bytes()).unwrap();
        drop(dispatcher);

        assert_eq!(events.into_inner(), ["2410", "TAKEOFF MINIMUMS"]);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.peak_open(), 1);
    }

    /// Decodes an element into all its text.
    struct Text(Tag);

    impl Decoder for Text {
        type Record = String;

        fn root(&self) -> &Tag {
            &self.0
        }

        fn decode(&self, element: Element) -> Result<String, Error> {
            Ok(element.all_text())
        }
    }
}
