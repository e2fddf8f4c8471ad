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
use crate::decoder::FieldTable;
use crate::{AtcService, Decoder, Element, Error, Namespaces, Tag};

/// Decodes `aixm:AirTrafficControlService` features.
///
/// The service's references use the `id ='` form, unlike the runway and
/// touchdown/liftoff references.
pub struct AtcServiceDecoder {
    root: Tag,
    gml_id: Tag,
    href: Tag,
    fields: FieldTable<Self, AtcService>,
}

impl AtcServiceDecoder {
    /// # Errors
    ///
    /// Returns an error if the `aixm`, `gml` or `xlink` alias is missing.
    pub fn new(ns: &Namespaces) -> Result<Self, Error> {
        let aixm = |local| ns.qualify("aixm", local);

        let fields = FieldTable::<Self, AtcService>::new()
            .field(aixm("radioCommunication")?, |d, s, e| {
                let href = e.attribute(&d.href).unwrap_or_default();
                s.channels.extend(coerce::reference(href, Delimiter::Spaced)?);
                Ok(())
            })
            .field(aixm("clientAirport")?, |d, s, e| {
                let href = e.attribute(&d.href).unwrap_or_default();
                s.airport_id = coerce::reference(href, Delimiter::Spaced)?;
                Ok(())
            });

        Ok(Self {
            root: aixm("AirTrafficControlService")?,
            gml_id: ns.qualify("gml", "id")?,
            href: ns.qualify("xlink", "href")?,
            fields,
        })
    }
}

impl Decoder for AtcServiceDecoder {
    type Record = AtcService;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<AtcService, Error> {
        let id = element
            .attribute(&self.gml_id)
            .ok_or(Error::MissingField("gml:id"))?;

        let mut service = AtcService {
            id: id.to_owned(),
            ..Default::default()
        };
        self.fields.walk(self, &mut service, element);
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::feature;

    #[test]
    fn collects_every_channel() {
        let xml = feature(
            "AirTrafficControlService",
            "ATC_1",
            r#"
            <aixm:radioCommunication xlink:href="RadioCommunicationChannel[@id ='RCC_1']"/>
            <aixm:radioCommunication xlink:href="RadioCommunicationChannel[@id='RCC_2']"/>
            <aixm:radioCommunication xlink:href="RadioCommunicationChannel[@id ='RCC_3']"/>
            <aixm:clientAirport xlink:href="AirportHeliport[@id ='AH_1']"/>"#,
        );
        let element = Element::parse(xml.as_bytes()).unwrap();
        let service = AtcServiceDecoder::new(&Namespaces::faa())
            .unwrap()
            .decode(element)
            .unwrap();

        // RCC_2 uses the other delimiter and is dropped
        assert_eq!(service.id, "ATC_1");
        assert_eq!(service.channels, ["RCC_1", "RCC_3"]);
        assert_eq!(service.airport_id.as_deref(), Some("AH_1"));
    }
}
