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

use std::collections::{BTreeMap, HashMap};

use faa_aixm::{
    Airport, AtcService, DocumentCycle, RadioChannel, Runway, TerminalProcedure, TouchdownLiftoff,
};
use log::debug;
use nasr_legacy::{Family, LegacyRecord};
use serde::Serialize;

use crate::Error;

/// Runways are matched to touchdown/liftoff annotations by designator and
/// airport.
type RunwayKey = (String, Option<String>);

/// A channel an air traffic control service referenced before the channel
/// was added.
struct PendingLink {
    service: String,
    channel: String,
    airport_id: Option<String>,
}

/// In-memory sink for decoded records, which is used to build a [`Catalog`].
///
/// Records can arrive in any order. Touchdown/liftoff annotations and
/// service links that reference a record not added yet are kept until it
/// arrives. Whatever is still unresolved when the catalog is built is
/// reported as an error.
#[derive(Default)]
pub struct CatalogBuilder {
    airports: Vec<Airport>,
    runways: Vec<Runway>,
    runway_index: HashMap<RunwayKey, Vec<usize>>,
    channels: Vec<RadioChannel>,
    channel_index: HashMap<String, usize>,
    procedures: Vec<TerminalProcedure>,
    cycle: Option<DocumentCycle>,
    legacy: BTreeMap<String, Vec<LegacyRecord>>,
    pending_annotations: Vec<TouchdownLiftoff>,
    pending_links: Vec<PendingLink>,
    errors: Vec<Error>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> Catalog {
        // a last try for everything that is still pending
        for patch in std::mem::take(&mut self.pending_annotations) {
            self.merge_touchdown(patch);
        }
        for link in std::mem::take(&mut self.pending_links) {
            if !self.link_channel(&link.channel, &link.airport_id) {
                self.errors.push(Error::UnresolvedService {
                    service: link.service,
                    channel: link.channel,
                });
            }
        }
        for patch in std::mem::take(&mut self.pending_annotations) {
            self.errors.push(Error::UnresolvedAnnotation {
                designator: patch.designator,
                airport_id: patch.airport_id,
            });
        }

        Catalog {
            airports: self.airports,
            runways: self.runways,
            channels: self.channels,
            procedures: self.procedures,
            cycle: self.cycle,
            legacy: self.legacy,
            errors: self.errors,
        }
    }

    pub fn add_airport(&mut self, arpt: Airport) {
        self.airports.push(arpt);
    }

    /// Adds the runway and merges all annotations received for it so far.
    pub fn add_runway(&mut self, mut rwy: Runway) {
        self.pending_annotations.retain(|patch| {
            if rwy.is_annotated_by(patch) {
                rwy.merge(patch);
                false
            } else {
                true
            }
        });

        if let Some(designator) = &rwy.designator {
            self.runway_index
                .entry((designator.clone(), rwy.airport_id.clone()))
                .or_default()
                .push(self.runways.len());
        }
        self.runways.push(rwy);
    }

    /// Merges a touchdown/liftoff annotation into its runway, or keeps it
    /// until the runway is added.
    pub fn merge_touchdown(&mut self, patch: TouchdownLiftoff) {
        let key = (patch.designator.clone(), patch.airport_id.clone());
        match self.runway_index.get(&key) {
            Some(indices) => {
                for &i in indices {
                    self.runways[i].merge(&patch);
                }
            }
            None => {
                debug!(
                    "runway {} of {:?} not known yet, keeping annotation",
                    patch.designator, patch.airport_id
                );
                self.pending_annotations.push(patch);
            }
        }
    }

    /// Adds the channel and links it to the airports of all services
    /// received for it so far.
    pub fn add_channel(&mut self, mut channel: RadioChannel) {
        self.pending_links.retain(|link| {
            if link.channel == channel.id {
                if link.airport_id.is_some() {
                    channel.airport_id = link.airport_id.clone();
                }
                false
            } else {
                true
            }
        });

        match self.channel_index.get(&channel.id) {
            Some(&i) => {
                // a link made through the earlier copy survives
                if channel.airport_id.is_none() {
                    channel.airport_id = self.channels[i].airport_id.take();
                }
                self.channels[i] = channel;
            }
            None => {
                self.channel_index.insert(channel.id.clone(), self.channels.len());
                self.channels.push(channel);
            }
        }
    }

    /// Sets the airport of every channel the service references.
    pub fn link_service(&mut self, service: AtcService) {
        for channel in service.channels {
            if !self.link_channel(&channel, &service.airport_id) {
                self.pending_links.push(PendingLink {
                    service: service.id.clone(),
                    channel,
                    airport_id: service.airport_id.clone(),
                });
            }
        }
    }

    /// Returns `false` if the channel is not known.
    fn link_channel(&mut self, id: &str, airport_id: &Option<String>) -> bool {
        let Some(&i) = self.channel_index.get(id) else {
            return false;
        };

        if airport_id.is_some() {
            self.channels[i].airport_id = airport_id.clone();
        }
        true
    }

    pub fn add_procedures(&mut self, procedures: Vec<TerminalProcedure>) {
        self.procedures.extend(procedures);
    }

    pub fn set_cycle(&mut self, cycle: DocumentCycle) {
        self.cycle = Some(cycle);
    }

    pub fn add_legacy(&mut self, family: Family, record: LegacyRecord) {
        self.legacy
            .entry(family.to_string())
            .or_default()
            .push(record);
    }

    pub fn add_error<E>(&mut self, e: E)
    where
        E: Into<Error>,
    {
        self.errors.push(e.into());
    }
}

/// Records of one NASR release, cross-referenced.
#[derive(Default, Debug, Serialize)]
pub struct Catalog {
    airports: Vec<Airport>,
    runways: Vec<Runway>,
    channels: Vec<RadioChannel>,
    procedures: Vec<TerminalProcedure>,
    cycle: Option<DocumentCycle>,
    legacy: BTreeMap<String, Vec<LegacyRecord>>,
    #[serde(skip)]
    errors: Vec<Error>,
}

impl Catalog {
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Returns the airport with the designator or ICAO location indicator
    /// `ident`.
    pub fn find_airport(&self, ident: &str) -> Option<&Airport> {
        self.airports.iter().find(|arpt| {
            arpt.designator.as_deref() == Some(ident) || arpt.icao_name.as_deref() == Some(ident)
        })
    }

    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    /// Returns the runways of the airport with the `gml:id` `airport_id`.
    pub fn runways_of<'a>(&'a self, airport_id: &'a str) -> impl Iterator<Item = &'a Runway> + 'a {
        self.runways
            .iter()
            .filter(move |rwy| rwy.airport_id.as_deref() == Some(airport_id))
    }

    pub fn channels(&self) -> &[RadioChannel] {
        &self.channels
    }

    pub fn procedures(&self) -> &[TerminalProcedure] {
        &self.procedures
    }

    /// The terminal procedures publication the procedures are from.
    pub fn cycle(&self) -> Option<&DocumentCycle> {
        self.cycle.as_ref()
    }

    /// Returns the records of a legacy product.
    pub fn legacy(&self, family: Family) -> &[LegacyRecord] {
        self.legacy
            .get(&family.to_string())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Errors that did not stop the catalog from being built.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runway(designator: &str, airport_id: &str) -> Runway {
        Runway {
            designator: Some(designator.to_string()),
            airport_id: Some(airport_id.to_string()),
            ..Runway::new(format!("RWY_{designator}"))
        }
    }

    fn annotation(designator: &str, airport_id: &str) -> TouchdownLiftoff {
        TouchdownLiftoff {
            designator: designator.to_string(),
            airport_id: Some(airport_id.to_string()),
            true_bearing: Some(74.0),
            ..Default::default()
        }
    }

    #[test]
    fn reports_unresolved_annotation() {
        let mut builder = CatalogBuilder::new();
        builder.add_runway(runway("07L", "AH_1"));
        builder.merge_touchdown(annotation("07L", "AH_2"));

        let catalog = builder.build();
        assert_eq!(catalog.runways()[0].true_bearing, None);
        assert_eq!(
            catalog.errors(),
            [Error::UnresolvedAnnotation {
                designator: "07L".to_string(),
                airport_id: Some("AH_2".to_string()),
            }]
        );
    }

    #[test]
    fn links_channels_in_any_order() {
        let service = AtcService {
            id: "ATC_1".to_string(),
            channels: vec!["RCC_1".to_string(), "RCC_2".to_string(), "RCC_3".to_string()],
            airport_id: Some("AH_1".to_string()),
        };

        let mut builder = CatalogBuilder::new();
        builder.add_channel(RadioChannel::new("RCC_1"));
        builder.link_service(service);
        builder.add_channel(RadioChannel::new("RCC_2"));

        let catalog = builder.build();
        let airports: Vec<_> = catalog
            .channels()
            .iter()
            .map(|c| c.airport_id.as_deref())
            .collect();
        assert_eq!(airports, [Some("AH_1"), Some("AH_1")]);
        assert_eq!(
            catalog.errors(),
            [Error::UnresolvedService {
                service: "ATC_1".to_string(),
                channel: "RCC_3".to_string(),
            }]
        );
    }

    #[test]
    fn keeps_link_when_channel_is_added_again() {
        let service = AtcService {
            id: "ATC_1".to_string(),
            channels: vec!["RCC_1".to_string()],
            airport_id: Some("AH_1".to_string()),
        };

        let mut builder = CatalogBuilder::new();
        builder.add_channel(RadioChannel::new("RCC_1"));
        builder.link_service(service);
        builder.add_channel(RadioChannel {
            tx_frequency: Some(118.3),
            ..RadioChannel::new("RCC_1")
        });

        let catalog = builder.build();
        assert_eq!(catalog.channels().len(), 1);
        assert_eq!(catalog.channels()[0].airport_id.as_deref(), Some("AH_1"));
        assert_eq!(catalog.channels()[0].tx_frequency, Some(118.3));
        assert!(catalog.errors().is_empty());
    }

    #[test]
    fn returns_empty_legacy_product() {
        let catalog = CatalogBuilder::new().build();
        assert!(catalog.legacy(Family::Awos).is_empty());
        assert!(catalog.find_airport("ANC").is_none());
    }
}
