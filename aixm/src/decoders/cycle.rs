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

use crate::{Decoder, DocumentCycle, Element, Error, Hook, Tag};

/// Reads the edition of a d-TPP metafile from its `digital_tpp` root.
///
/// Runs as a start hook, so the cycle is known before the first procedure
/// record is decoded.
pub struct CycleDecoder {
    root: Tag,
    cycle: Tag,
    from_edate: Tag,
    to_edate: Tag,
}

impl CycleDecoder {
    pub fn new() -> Self {
        Self {
            root: Tag::local("digital_tpp"),
            cycle: Tag::local("cycle"),
            from_edate: Tag::local("from_edate"),
            to_edate: Tag::local("to_edate"),
        }
    }
}

impl Default for CycleDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for CycleDecoder {
    type Record = DocumentCycle;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn hook(&self) -> Hook {
        Hook::Start
    }

    fn decode(&self, element: Element) -> Result<DocumentCycle, Error> {
        let cycle = element
            .attribute(&self.cycle)
            .map(str::trim)
            .filter(|cycle| !cycle.is_empty())
            .ok_or(Error::MissingField("cycle"))?;

        Ok(DocumentCycle {
            cycle: cycle.to_owned(),
            from_edate: element.attribute(&self.from_edate).map(str::to_owned),
            to_edate: element.attribute(&self.to_edate).map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cycle_attributes() {
        let element = Element::new(Tag::local("digital_tpp"))
            .with_attribute(Tag::local("cycle"), "2410")
            .with_attribute(Tag::local("from_edate"), "0901Z  10/03/24")
            .with_attribute(Tag::local("to_edate"), "0901Z  10/31/24");

        let cycle = CycleDecoder::new().decode(element).unwrap();
        assert_eq!(cycle.cycle, "2410");
        assert_eq!(cycle.from_edate.as_deref(), Some("0901Z  10/03/24"));
        assert_eq!(cycle.to_edate.as_deref(), Some("0901Z  10/31/24"));
    }

    #[test]
    fn requires_cycle() {
        let element = Element::new(Tag::local("digital_tpp"));
        assert_eq!(
            CycleDecoder::new().decode(element),
            Err(Error::MissingField("cycle"))
        );
    }
}
