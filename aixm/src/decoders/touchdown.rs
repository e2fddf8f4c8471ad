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

use log::debug;

use crate::coerce::{self, Delimiter};
use crate::decoder::{all_text, text, FieldTable};
use crate::{Decoder, Element, Error, Namespaces, Tag, TouchdownLiftoff};

/// Decodes `aixm:TouchDownLiftOff` features into runway annotations.
///
/// Only three annotated properties are kept: the right hand traffic pattern,
/// the runway end's true bearing and the ILS type.
pub struct TouchdownLiftoffDecoder {
    root: Tag,
    href: Tag,
    property_name: Tag,
    translated_note: Tag,
    fields: FieldTable<Self, TouchdownLiftoff>,
}

impl TouchdownLiftoffDecoder {
    /// # Errors
    ///
    /// Returns an error if the `aixm` or `xlink` alias is missing.
    pub fn new(ns: &Namespaces) -> Result<Self, Error> {
        let aixm = |local| ns.qualify("aixm", local);

        let fields = FieldTable::<Self, TouchdownLiftoff>::new()
            .field(aixm("designator")?, |_, t, e| {
                t.designator = text(e).unwrap_or_default();
                Ok(())
            })
            .field(aixm("annotation")?, Self::annotation)
            .field(aixm("associatedAirportHeliport")?, |d, t, e| {
                let href = e.attribute(&d.href).unwrap_or_default();
                t.airport_id = coerce::reference(href, Delimiter::Quoted)?;
                Ok(())
            });

        Ok(Self {
            root: aixm("TouchDownLiftOff")?,
            href: ns.qualify("xlink", "href")?,
            property_name: aixm("propertyName")?,
            translated_note: aixm("translatedNote")?,
            fields,
        })
    }

    fn annotation(&self, tdlo: &mut TouchdownLiftoff, e: &Element) -> Result<(), Error> {
        let Some(note) = e.first_child() else {
            return Ok(());
        };
        let Some(property) = note.find(&self.property_name).and_then(text) else {
            return Ok(());
        };

        let property = property.to_lowercase();
        let value = note
            .find(&self.translated_note)
            .and_then(all_text)
            .unwrap_or_default();

        if property.contains("righthandtrafficpattern") {
            tdlo.right_traffic_pattern = coerce::boolean(&value);
        } else if property.contains("endtruebearing") {
            tdlo.true_bearing = coerce::float("true bearing", &value)?;
        } else if property.contains("ilstype") {
            tdlo.ils_type = (!value.is_empty()).then_some(value);
        } else {
            debug!("ignoring touchdown/liftoff property '{property}'");
        }

        Ok(())
    }
}

impl Decoder for TouchdownLiftoffDecoder {
    type Record = TouchdownLiftoff;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<TouchdownLiftoff, Error> {
        let mut tdlo = TouchdownLiftoff::default();
        self.fields.walk(self, &mut tdlo, element);

        if tdlo.designator.is_empty() {
            return Err(Error::MissingField("designator"));
        }
        Ok(tdlo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::feature;

    fn note(property: &str, value: &str) -> String {
        format!(
            r#"<aixm:annotation>
                 <aixm:Note>
                   <aixm:propertyName>{property}</aixm:propertyName>
                   <aixm:translatedNote>
                     <aixm:LinguisticNote><aixm:note>{value}</aixm:note></aixm:LinguisticNote>
                   </aixm:translatedNote>
                 </aixm:Note>
               </aixm:annotation>"#
        )
    }

    fn decode(properties: &str) -> Result<TouchdownLiftoff, Error> {
        let xml = feature("TouchDownLiftOff", "TLOF_1", properties);
        let element = Element::parse(xml.as_bytes())?;
        TouchdownLiftoffDecoder::new(&Namespaces::faa())?.decode(element)
    }

    #[test]
    fn decodes_annotations() {
        let properties = [
            "<aixm:designator>07L</aixm:designator>".to_string(),
            note("rightHandTrafficPattern", "Y"),
            note("endTrueBearing", "66.5"),
            note("ilsType", "ILS/DME"),
            note("somethingElse", "ignored"),
            r#"<aixm:associatedAirportHeliport xlink:href="urn:uuid:AirportHeliport[@id='AH_0000001']"/>"#
                .to_string(),
        ]
        .concat();

        let tdlo = decode(&properties).expect("annotation should decode");
        assert_eq!(
            tdlo,
            TouchdownLiftoff {
                designator: "07L".to_string(),
                airport_id: Some("AH_0000001".to_string()),
                right_traffic_pattern: Some(true),
                true_bearing: Some(66.5),
                ils_type: Some("ILS/DME".to_string()),
            }
        );
    }

    #[test]
    fn requires_designator() {
        assert_eq!(
            decode(&note("ilsType", "ILS")),
            Err(Error::MissingField("designator"))
        );
    }
}
