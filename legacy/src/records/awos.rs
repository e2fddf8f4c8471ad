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

//! Layout of `AWOS.txt`.

use crate::coerce::DateLayout::*;
use crate::layout::Coerce::*;
use crate::layout::Column;

pub(crate) static LAYOUTS: &[(&str, &[Column])] = &[("AWOS1", AWOS1), ("AWOS2", &[])];

const AWOS1: &[Column] = columns![
    ("id", 5, 9),
    ("type", 9, 19),
    ("commissioning", 19, 20, Boolean),
    ("commissioning_date", 20, 30, Date(MonthDayYear)),
    ("latitude", 31, 45, Coordinate),
    ("longitude", 45, 60, Coordinate),
    ("elevation", 60, 67, Float),
    ("surveyed", 67, 68, Surveyed),
    ("frequency", 68, 75, Float),
    ("frequency2", 75, 82, Float),
    ("phone_number", 82, 96),
    ("phone_number2", 96, 110),
    ("associated_facility", 110, 121),
    ("city", 121, 161),
    ("state", 161, 163),
    ("effective_date", 163, 173, Date(MonthDayYear)),
];
