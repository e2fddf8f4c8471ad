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

use crate::decoder::text;
use crate::{Decoder, Element, Error, Tag, TerminalProcedure};

/// Decodes the charts of one `airport_name` element of the d-TPP metafile.
///
/// The metafile does not use namespaces, so all names are local.
pub struct ProcedureDecoder {
    root: Tag,
    apt_ident: Tag,
    icao_ident: Tag,
    airport_name: Tag,
    record: Tag,
    chart_name: Tag,
    chart_code: Tag,
    pdf_name: Tag,
}

impl ProcedureDecoder {
    pub fn new() -> Self {
        Self {
            root: Tag::local("airport_name"),
            apt_ident: Tag::local("apt_ident"),
            icao_ident: Tag::local("icao_ident"),
            airport_name: Tag::local("ID"),
            record: Tag::local("record"),
            chart_name: Tag::local("chart_name"),
            chart_code: Tag::local("chart_code"),
            pdf_name: Tag::local("pdf_name"),
        }
    }
}

impl Default for ProcedureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ProcedureDecoder {
    type Record = Vec<TerminalProcedure>;

    fn root(&self) -> &Tag {
        &self.root
    }

    fn decode(&self, element: Element) -> Result<Vec<TerminalProcedure>, Error> {
        let attribute = |name: &Tag| {
            element
                .attribute(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        let apt_ident = attribute(&self.apt_ident).ok_or(Error::MissingField("apt_ident"))?;
        let icao_ident = attribute(&self.icao_ident);
        let airport_name = attribute(&self.airport_name);

        let value = |record: &Element, tag: &Tag| record.find(tag).and_then(text);

        let procedures = element
            .children()
            .iter()
            .filter(|child| child.tag() == &self.record)
            .map(|record| TerminalProcedure {
                apt_ident: apt_ident.clone(),
                icao_ident: icao_ident.clone(),
                airport_name: airport_name.clone(),
                chart_name: value(record, &self.chart_name),
                chart_code: value(record, &self.chart_code),
                pdf_name: value(record, &self.pdf_name),
            })
            .collect();

        Ok(procedures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one_procedure_per_record() {
        let xml = r#"
          <airport_name ID="TED STEVENS ANCHORAGE INTL" military="N" apt_ident="ANC" icao_ident="PANC" alnum="1">
            <record>
              <chartseq>10100</chartseq>
              <chart_code>MIN</chart_code>
              <chart_name>TAKEOFF MINIMUMS</chart_name>
              <pdf_name>AKTO.PDF</pdf_name>
            </record>
            <record>
              <chart_code>IAP</chart_code>
              <chart_name>ILS OR LOC RWY 07R</chart_name>
              <pdf_name>00200IL7R.PDF</pdf_name>
            </record>
          </airport_name>"#;

        let element = Element::parse(xml.as_bytes()).unwrap();
        let procedures = ProcedureDecoder::new().decode(element).unwrap();

        assert_eq!(procedures.len(), 2);
        assert_eq!(procedures[0].apt_ident, "ANC");
        assert_eq!(procedures[0].icao_ident.as_deref(), Some("PANC"));
        assert_eq!(
            procedures[0].airport_name.as_deref(),
            Some("TED STEVENS ANCHORAGE INTL")
        );
        assert_eq!(procedures[1].chart_code.as_deref(), Some("IAP"));
        assert_eq!(procedures[1].chart_name.as_deref(), Some("ILS OR LOC RWY 07R"));
        assert_eq!(procedures[1].pdf_name.as_deref(), Some("00200IL7R.PDF"));
    }

    #[test]
    fn requires_airport_ident() {
        let element = Element::parse(r#"<airport_name ID="NOWHERE"/>"#.as_bytes()).unwrap();
        assert_eq!(
            ProcedureDecoder::new().decode(element),
            Err(Error::MissingField("apt_ident"))
        );
    }
}
