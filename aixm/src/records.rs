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

//! Records produced by the decoders.
//!
//! Lengths and elevations are in feet, frequencies in MHz and coordinates in
//! WGS84 decimal degrees.

use serde::Serialize;

#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct Airport {
    /// The feature's `gml:id`.
    pub id: String,
    pub designator: Option<String>,
    pub name: Option<String>,
    pub icao_name: Option<String>,
    pub airport_type: Option<String>,
    /// Feature lifetime, as published.
    pub activated: Option<String>,
    pub private_use: Option<bool>,
    pub control_type: Option<String>,
    pub field_elevation: Option<f64>,
    /// Signed degrees, west is negative.
    pub magnetic_variation: Option<f64>,
    pub wind_direction_indicator: Option<bool>,
    pub served_city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Remarks joined by two spaces.
    pub remarks: String,
    pub sectional_chart: Option<String>,
    pub lighting_schedule: Option<String>,
    pub beacon_lighting_schedule: Option<String>,
    pub marker_lens_color: Option<String>,
    pub traffic_control_tower_on_airport: Option<bool>,
    pub segmented_circle_marker_on_airport: Option<bool>,
    pub attendance_schedule: Option<String>,
}

impl Airport {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn push_remark(&mut self, remark: &str) {
        self.remarks.push_str(remark);
        self.remarks.push_str("  ");
    }
}

#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct Runway {
    pub id: String,
    /// The `gml:id` of the airport this runway belongs to.
    pub airport_id: Option<String>,
    pub designator: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub composition: Option<String>,
    pub preparation: Option<String>,
    pub condition: Option<String>,
    pub right_traffic_pattern: Option<bool>,
    pub true_bearing: Option<f64>,
    pub ils_type: Option<String>,
}

impl Runway {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Returns `true` if the touchdown/liftoff annotation belongs to this
    /// runway.
    pub fn is_annotated_by(&self, patch: &TouchdownLiftoff) -> bool {
        self.designator.as_deref() == Some(patch.designator.as_str())
            && self.airport_id == patch.airport_id
    }

    /// Copies the fields present in the annotation.
    pub fn merge(&mut self, patch: &TouchdownLiftoff) {
        if let Some(right) = patch.right_traffic_pattern {
            self.right_traffic_pattern = Some(right);
        }
        if let Some(bearing) = patch.true_bearing {
            self.true_bearing = Some(bearing);
        }
        if let Some(ils) = &patch.ils_type {
            self.ils_type = Some(ils.clone());
        }
    }
}

#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct RadioChannel {
    pub id: String,
    /// Set when an air traffic control service links the channel.
    pub airport_id: Option<String>,
    pub channel_name: Option<String>,
    pub tx_frequency: Option<f64>,
    pub rx_frequency: Option<f64>,
}

impl RadioChannel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Links radio channels to the airport they serve.
#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct AtcService {
    pub id: String,
    pub channels: Vec<String>,
    pub airport_id: Option<String>,
}

/// Annotations of a touchdown and liftoff area that are merged into the
/// runway with the same designator and airport.
#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct TouchdownLiftoff {
    pub designator: String,
    pub airport_id: Option<String>,
    pub right_traffic_pattern: Option<bool>,
    pub true_bearing: Option<f64>,
    pub ils_type: Option<String>,
}

/// One chart of the terminal procedures publication.
#[derive(Clone, Default, PartialEq, Debug, Serialize)]
pub struct TerminalProcedure {
    pub apt_ident: String,
    pub icao_ident: Option<String>,
    pub airport_name: Option<String>,
    pub chart_name: Option<String>,
    pub chart_code: Option<String>,
    pub pdf_name: Option<String>,
}

/// Edition of a terminal procedures publication.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize)]
pub struct DocumentCycle {
    pub cycle: String,
    pub from_edate: Option<String>,
    pub to_edate: Option<String>,
}
