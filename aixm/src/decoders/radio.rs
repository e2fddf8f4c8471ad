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

use crate::coerce;
use crate::decoder::{text, FieldTable};
use crate::{Decoder, Element, Error, Namespaces, RadioChannel, Tag};

/// Decodes `aixm:RadioCommunicationChannel` features.
pub struct RadioChannelDecoder {
    root: Tag,
    gml_id: Tag,
    uom: Tag,
    fields: FieldTable<Self, RadioChannel>,
}

impl RadioChannelDecoder {
    /// # Errors
    ///
    /// Returns an error if the `aixm` or `gml` alias is missing.
    pub fn new(ns: &Namespaces) -> Result<Self, Error> {
        let aixm = |local| ns.qualify("aixm", local);

        let fields = FieldTable::<Self, RadioChannel>::new()
            .field(aixm("interpretation")?, |_, r, e| {
                r.channel_name = text(e);
                Ok(())
            })
            .field(aixm("frequencyTransmission")?, |d, r, e| {
                coerce::check_uom("transmission frequency", e.attribute(&d.uom), "MHZ");
                r.tx_frequency = coerce::float("transmission frequency", e.text())?;
                Ok(())
            })
            .field(aixm("frequencyReception")?, |d, r, e| {
                coerce::check_uom("reception frequency", e.attribute(&d.uom), "MHZ");
                r.rx_frequency = coerce::float("reception frequency", e.text())?;
                Ok(())
            });

        Ok(Self {
            root: aixm("RadioCommunicationChannel")?,
            gml_id: ns.qualify("gml", "id")?,
            uom: Tag::local("uom"),
            fields,
        })
    }
}

impl Decoder for RadioChannelDecoder {
    type Record = RadioChannel;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<RadioChannel, Error> {
        let id = element
            .attribute(&self.gml_id)
            .ok_or(Error::MissingField("gml:id"))?;

        let mut channel = RadioChannel::new(id);
        self.fields.walk(self, &mut channel, element);
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::feature;

    #[test]
    fn decodes_channel() {
        let xml = feature(
            "RadioCommunicationChannel",
            "RCC_0000042",
            r#"
            <aixm:interpretation>TWR</aixm:interpretation>
            <aixm:frequencyTransmission uom="MHZ">118.3</aixm:frequencyTransmission>
            <aixm:frequencyReception uom="MHZ">118.3</aixm:frequencyReception>"#,
        );
        let element = Element::parse(xml.as_bytes()).unwrap();
        let channel = RadioChannelDecoder::new(&Namespaces::faa())
            .unwrap()
            .decode(element)
            .unwrap();

        assert_eq!(
            channel,
            RadioChannel {
                id: "RCC_0000042".to_string(),
                airport_id: None,
                channel_name: Some("TWR".to_string()),
                tx_frequency: Some(118.3),
                rx_frequency: Some(118.3),
            }
        );
    }
}
