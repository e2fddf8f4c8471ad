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

use crate::coerce::{self, Delimiter};
use crate::decoder::{text, FieldTable};
use crate::{Decoder, Element, Error, Namespaces, Runway, Tag};

/// Decodes `aixm:Runway` features.
///
/// Touchdown and liftoff annotations are not part of the feature; they are
/// decoded separately by the
/// [`TouchdownLiftoffDecoder`](crate::TouchdownLiftoffDecoder) and merged
/// afterwards.
pub struct RunwayDecoder {
    root: Tag,
    gml_id: Tag,
    href: Tag,
    uom: Tag,
    composition: Tag,
    preparation: Tag,
    surface_condition: Tag,
    fields: FieldTable<Self, Runway>,
}

impl RunwayDecoder {
    /// # Errors
    ///
    /// Returns an error if the `aixm`, `gml` or `xlink` alias is missing.
    pub fn new(ns: &Namespaces) -> Result<Self, Error> {
        let aixm = |local| ns.qualify("aixm", local);

        let fields = FieldTable::<Self, Runway>::new()
            .field(aixm("associatedAirportHeliport")?, |d, r, e| {
                let href = e.attribute(&d.href).unwrap_or_default();
                r.airport_id = coerce::reference(href, Delimiter::Quoted)?;
                Ok(())
            })
            .field(aixm("designator")?, |_, r, e| {
                r.designator = text(e);
                Ok(())
            })
            .field(aixm("lengthStrip")?, Self::length)
            .field(aixm("nominalLength")?, Self::length)
            .field(aixm("widthStrip")?, Self::width)
            .field(aixm("nominalWidth")?, Self::width)
            .field(aixm("surfaceProperties")?, |d, r, e| {
                d.surface(r, e);
                Ok(())
            });

        Ok(Self {
            root: aixm("Runway")?,
            gml_id: ns.qualify("gml", "id")?,
            href: ns.qualify("xlink", "href")?,
            uom: Tag::local("uom"),
            composition: aixm("composition")?,
            preparation: aixm("preparation")?,
            surface_condition: aixm("surfaceCondition")?,
            fields,
        })
    }

    fn length(&self, runway: &mut Runway, e: &Element) -> Result<(), Error> {
        coerce::check_uom("runway length", e.attribute(&self.uom), "ft");
        runway.length = coerce::float("runway length", e.text())?;
        Ok(())
    }

    fn width(&self, runway: &mut Runway, e: &Element) -> Result<(), Error> {
        coerce::check_uom("runway width", e.attribute(&self.uom), "ft");
        runway.width = coerce::float("runway width", e.text())?;
        Ok(())
    }

    fn surface(&self, runway: &mut Runway, properties: &Element) {
        let Some(characteristics) = properties.first_child() else {
            return;
        };

        let value = |tag: &Tag| characteristics.find(tag).and_then(text);
        runway.composition = value(&self.composition);
        runway.preparation = value(&self.preparation);
        runway.condition = value(&self.surface_condition);
    }
}

impl Decoder for RunwayDecoder {
    type Record = Runway;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<Runway, Error> {
        let id = element
            .attribute(&self.gml_id)
            .ok_or(Error::MissingField("gml:id"))?;

        let mut runway = Runway::new(id);
        self.fields.walk(self, &mut runway, element);
        Ok(runway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::feature;

    fn decode(properties: &str) -> Runway {
        let xml = feature("Runway", "RWY_0000001_1", properties);
        let element = Element::parse(xml.as_bytes()).expect("feature should parse");
        RunwayDecoder::new(&Namespaces::faa())
            .expect("decoder should build")
            .decode(element)
            .expect("runway should decode")
    }

    #[test]
    fn decodes_runway() {
        let runway = decode(
            r#"
            <aixm:designator>07L/25R</aixm:designator>
            <aixm:type>RWY</aixm:type>
            <aixm:lengthStrip uom="FT">10600</aixm:lengthStrip>
            <aixm:widthStrip uom="FT">150</aixm:widthStrip>
            <aixm:surfaceProperties>
              <aixm:SurfaceCharacteristics>
                <aixm:composition>ASPH</aixm:composition>
                <aixm:preparation>GROOVED</aixm:preparation>
                <aixm:surfaceCondition>GOOD</aixm:surfaceCondition>
              </aixm:SurfaceCharacteristics>
            </aixm:surfaceProperties>
            <aixm:associatedAirportHeliport xlink:href="urn:uuid:AirportHeliport[@id='AH_0000001']"/>"#,
        );

        assert_eq!(runway.id, "RWY_0000001_1");
        assert_eq!(runway.designator.as_deref(), Some("07L/25R"));
        assert_eq!(runway.length, Some(10600.0));
        assert_eq!(runway.width, Some(150.0));
        assert_eq!(runway.composition.as_deref(), Some("ASPH"));
        assert_eq!(runway.preparation.as_deref(), Some("GROOVED"));
        assert_eq!(runway.condition.as_deref(), Some("GOOD"));
        assert_eq!(runway.airport_id.as_deref(), Some("AH_0000001"));
        assert_eq!(runway.true_bearing, None);
    }

    #[test]
    fn accepts_nominal_dimensions() {
        let runway = decode(
            r#"<aixm:nominalLength uom="FT">3000</aixm:nominalLength>
               <aixm:nominalWidth uom="FT">60</aixm:nominalWidth>"#,
        );
        assert_eq!(runway.length, Some(3000.0));
        assert_eq!(runway.width, Some(60.0));
    }

    #[test]
    fn forwards_runway_with_malformed_reference() {
        let runway = decode(
            r#"<aixm:designator>18</aixm:designator>
               <aixm:associatedAirportHeliport xlink:href="urn:uuid:AirportHeliport"/>"#,
        );
        assert_eq!(runway.designator.as_deref(), Some("18"));
        assert_eq!(runway.airport_id, None);
    }
}
