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

//! Layout of `FIX.txt`. Only the base record is decoded.

use crate::layout::Coerce::*;
use crate::layout::Column;

pub(crate) static LAYOUTS: &[(&str, &[Column])] = &[
    ("FIX1", FIX1),
    ("FIX2", &[]),
    ("FIX3", &[]),
    ("FIX4", &[]),
    ("FIX5", &[]),
];

const FIX1: &[Column] = columns![
    ("id", 4, 34),
    ("state_name", 34, 64),
    ("region_code", 64, 65),
    ("latitude", 66, 80, Coordinate),
    ("longitude", 80, 94, Coordinate),
    ("type", 94, 97),
    ("mls_component", 97, 119),
    ("radar_component", 119, 141),
    ("previous_name", 141, 174),
    ("charting_info", 174, 212),
    ("to_be_published", 212, 213, Boolean),
    ("fix_use", 213, 228),
    ("nas_identifier", 228, 233),
    ("high_artcc", 233, 237),
    ("low_artcc", 237, 241),
    ("country_name", 241, 271),
    ("pitch", 271, 272, Boolean),
    ("catch", 272, 273, Boolean),
    ("sua_atcaa", 273, 274, Boolean),
];
