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

//! Decoders for the FAA AIXM features and the d-TPP index.

mod airport;
mod atc;
mod cycle;
mod procedure;
mod radio;
mod runway;
mod touchdown;

pub use airport::AirportDecoder;
pub use atc::AtcServiceDecoder;
pub use cycle::CycleDecoder;
pub use procedure::ProcedureDecoder;
pub use radio::RadioChannelDecoder;
pub use runway::RunwayDecoder;
pub use touchdown::TouchdownLiftoffDecoder;

/// Wraps AIXM time slice properties into a minimal feature document for the
/// decoder tests.
#[cfg(test)]
pub(crate) fn feature(name: &str, id: &str, properties: &str) -> String {
    format!(
        r#"<aixm:{name} xmlns:aixm="http://www.aixm.aero/schema/5.1"
                 xmlns:apt="http://www.faa.gov/aixm5.1/apt"
                 xmlns:gml="http://www.opengis.net/gml/3.2"
                 xmlns:xlink="http://www.w3.org/1999/xlink"
                 gml:id="{id}">
             <aixm:timeSlice>
               <aixm:{name}TimeSlice gml:id="{id}_TS">
                 {properties}
               </aixm:{name}TimeSlice>
             </aixm:timeSlice>
           </aixm:{name}>"#
    )
}
