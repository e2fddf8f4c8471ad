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

//! Record layouts and the line-oriented driver.

pub(crate) mod apt;
pub(crate) mod awos;
pub(crate) mod fix;

use std::iter::Enumerate;
use std::str::Lines;

use log::{error, warn};

use crate::{Error, Family, LegacyRecord};

/// Iterator over the records of a legacy text product.
///
/// Lines are decoded lazily, one per call to `next`. Blank lines and record
/// types without columns are skipped silently. Lines with an unknown record
/// type or that are too short for their columns are logged and skipped;
/// their errors are kept and can be read with [`Records::skipped`].
pub struct Records<'a> {
    family: Family,
    lines: Enumerate<Lines<'a>>,
    skipped: Vec<Error>,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator over the lines of `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nasr_legacy::{Family, Records};
    /// let text = "FIX2 not decoded\n\nXYZ1 unknown\n";
    /// assert_eq!(Records::new(Family::Fix, text).count(), 0);
    /// ```
    pub fn new(family: Family, text: &'a str) -> Self {
        Self {
            family,
            lines: text.lines().enumerate(),
            skipped: Vec::new(),
        }
    }

    /// Returns the errors of the lines skipped so far.
    pub fn skipped(&self) -> &[Error] {
        &self.skipped
    }
}

impl Iterator for Records<'_> {
    type Item = LegacyRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            let number = index + 1;
            match self.family.parse_line(line, number) {
                Ok(Some(record)) => return Some(record),
                Ok(None) => {}
                Err(e) => {
                    match e {
                        Error::UnknownRecordType { .. } => {
                            error!("{} line {number}: {e}", self.family)
                        }
                        _ => warn!("{} line {number}: {e}", self.family),
                    }
                    self.skipped.push(e);
                }
            }
        }

        None
    }
}
