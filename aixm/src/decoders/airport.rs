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
use crate::decoder::{all_text, text, FieldTable};
use crate::{Airport, Decoder, Element, Error, Namespaces, Tag};

/// Decodes `aixm:AirportHeliport` features.
pub struct AirportDecoder {
    root: Tag,
    gml_id: Tag,
    linguistic_note: Tag,
    uom: Tag,
    fields: FieldTable<Self, Airport>,
}

impl AirportDecoder {
    /// # Errors
    ///
    /// Returns an error if the `aixm`, `apt` or `gml` alias is missing.
    pub fn new(ns: &Namespaces) -> Result<Self, Error> {
        let aixm = |local| ns.qualify("aixm", local);
        let apt = |local| ns.qualify("apt", local);

        let fields = FieldTable::<Self, Airport>::new()
            .field(aixm("featureLifetime")?, |_, a, e| {
                a.activated = all_text(e);
                Ok(())
            })
            .field(aixm("designator")?, |_, a, e| {
                a.designator = text(e);
                Ok(())
            })
            .field(aixm("name")?, |_, a, e| {
                a.name = text(e);
                Ok(())
            })
            .field(aixm("locationIndicatorICAO")?, |_, a, e| {
                a.icao_name = text(e);
                Ok(())
            })
            .field(aixm("type")?, |_, a, e| {
                a.airport_type = text(e);
                Ok(())
            })
            .field(aixm("privateUse")?, |_, a, e| {
                a.private_use = coerce::boolean(e.text());
                Ok(())
            })
            .field(aixm("controlType")?, |_, a, e| {
                a.control_type = text(e);
                Ok(())
            })
            .field(aixm("fieldElevation")?, |d, a, e| {
                coerce::check_uom("field elevation", e.attribute(&d.uom), "ft");
                a.field_elevation = coerce::float("field elevation", e.text())?;
                Ok(())
            })
            .field(aixm("magneticVariation")?, |_, a, e| {
                a.magnetic_variation = coerce::magnetic_variation(e.text())?;
                Ok(())
            })
            .field(aixm("windDirectionIndicator")?, |_, a, e| {
                a.wind_direction_indicator = coerce::boolean(e.text());
                Ok(())
            })
            .field(aixm("servedCity")?, |_, a, e| {
                a.served_city = all_text(e);
                Ok(())
            })
            .field(aixm("ARP")?, |_, a, e| {
                if let Some((lon, lat)) = coerce::position(&e.all_text())? {
                    a.longitude = Some(lon);
                    a.latitude = Some(lat);
                }
                Ok(())
            })
            .field(aixm("annotation")?, |d, a, e| {
                d.remarks(a, e);
                Ok(())
            })
            .field(aixm("extension")?, |d, a, e| {
                d.fields.apply_nested(d, a, e);
                Ok(())
            })
            .field(apt("aeronauticalSectionalChart")?, |_, a, e| {
                a.sectional_chart = text(e);
                Ok(())
            })
            .field(apt("lightingSchedule")?, |_, a, e| {
                a.lighting_schedule = text(e);
                Ok(())
            })
            .field(apt("beaconLightingSchedule")?, |_, a, e| {
                a.beacon_lighting_schedule = text(e);
                Ok(())
            })
            .field(apt("markerLensColor")?, |_, a, e| {
                a.marker_lens_color = text(e);
                Ok(())
            })
            .field(apt("trafficControlTowerOnAirport")?, |_, a, e| {
                a.traffic_control_tower_on_airport = coerce::boolean(e.text());
                Ok(())
            })
            .field(apt("segmentedCircleMarkerOnAirport")?, |_, a, e| {
                a.segmented_circle_marker_on_airport = coerce::boolean(e.text());
                Ok(())
            })
            .field(apt("airportAttendanceSchedule")?, |_, a, e| {
                a.attendance_schedule = text(e);
                Ok(())
            });

        Ok(Self {
            root: aixm("AirportHeliport")?,
            gml_id: ns.qualify("gml", "id")?,
            linguistic_note: aixm("LinguisticNote")?,
            uom: Tag::local("uom"),
            fields,
        })
    }

    /// Appends every linguistic note that is not a remark name.
    fn remarks(&self, airport: &mut Airport, annotation: &Element) {
        let notes = annotation
            .iter()
            .filter(|note| note.tag() == &self.linguistic_note);

        for note in notes {
            let is_name = note
                .attribute(&self.gml_id)
                .is_some_and(|id| id.contains("REMARK_NAME"));
            if is_name {
                continue;
            }

            let remark = note.all_text();
            if !remark.is_empty() {
                airport.push_remark(&remark.replace('"', "'"));
            }
        }
    }
}

impl Decoder for AirportDecoder {
    type Record = Airport;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<Airport, Error> {
        let id = element
            .attribute(&self.gml_id)
            .ok_or(Error::MissingField("gml:id"))?;

        let mut airport = Airport::new(id);
        self.fields.walk(self, &mut airport, element);
        airport.remarks = airport.remarks.trim().to_owned();
        Ok(airport)
    }
}
