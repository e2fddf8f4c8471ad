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

/// Builds a column table from `(name, start, end)` or
/// `(name, start, end, coercion)` tuples. Columns without a coercion are text.
macro_rules! columns {
    (@coerce) => {
        $crate::layout::Coerce::Text
    };

    (@coerce $coerce:expr) => {
        $coerce
    };

    ($( ($name:literal, $start:literal, $end:literal $(, $coerce:expr)?) ),* $(,)?) => {
        &[$(
            $crate::layout::Column::new($name, $start, $end, columns!(@coerce $($coerce)?))
        ),*]
    };
}
