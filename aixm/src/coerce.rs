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

//! Coercion of AIXM text and attribute values.
//!
//! All functions return `Ok(None)` for empty input. The grammars here are the
//! ones of the XML feeds and intentionally differ from the legacy text
//! products (e.g. which strings count as `true`).

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::Error;

static MAGNETIC_VARIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<var>[0-9]{1,2})(?P<dir>[EW])").expect("valid regex"));

/// Delimiter that introduces the referenced id within an `xlink:href`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Delimiter {
    /// `id='`, used by runway and touchdown/liftoff references.
    Quoted,
    /// `id ='`, used by air traffic control service references.
    Spaced,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quoted => "id='",
            Self::Spaced => "id ='",
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Returns `true` for `t`, `true`, `1`, `y` or `yes` in any case.
pub fn boolean(s: &str) -> Option<bool> {
    non_empty(s).map(|s| matches!(s.to_lowercase().as_str(), "t" | "true" | "1" | "y" | "yes"))
}

/// Parses a decimal number.
///
/// # Errors
///
/// Returns [`Error::MalformedValue`] if the value is not a number.
pub fn float(field: &'static str, s: &str) -> Result<Option<f64>, Error> {
    non_empty(s)
        .map(|v| {
            v.parse().map_err(|_| Error::MalformedValue {
                field,
                value: v.to_owned(),
            })
        })
        .transpose()
}

/// Parses a `"longitude latitude"` pair as used by the airport reference
/// point.
///
/// # Errors
///
/// Returns [`Error::MalformedValue`] if there are not two numbers.
pub fn position(s: &str) -> Result<Option<(f64, f64)>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let malformed = || Error::MalformedValue {
        field: "position",
        value: v.to_owned(),
    };

    let mut parts = v.split_whitespace();
    let lon = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
    let lat = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
    Ok(Some((lon, lat)))
}

/// Parses a magnetic variation, either as signed decimal degrees or as
/// degrees followed by `E` or `W` where west is negative.
///
/// # Errors
///
/// Returns [`Error::MalformedValue`] if neither form matches.
pub fn magnetic_variation(s: &str) -> Result<Option<f64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    if let Ok(deg) = v.parse::<f64>() {
        return Ok(Some(deg));
    }

    let caps = MAGNETIC_VARIATION
        .captures(v)
        .ok_or_else(|| Error::MalformedValue {
            field: "magnetic variation",
            value: v.to_owned(),
        })?;

    let deg: f64 = caps["var"].parse().unwrap_or_default();
    match &caps["dir"] {
        "W" => Ok(Some(-deg)),
        _ => Ok(Some(deg)),
    }
}

/// Extracts the referenced id from an `xlink:href` value.
///
/// The id is the text between `delimiter` and the next single quote, e.g.
/// `AH_0000001` in `urn:...[@id='AH_0000001']`.
///
/// # Errors
///
/// Returns [`Error::MalformedReference`] if the delimiter or the closing
/// quote is missing.
pub fn reference(href: &str, delimiter: Delimiter) -> Result<Option<String>, Error> {
    if non_empty(href).is_none() {
        return Ok(None);
    }

    let malformed = || Error::MalformedReference {
        href: href.to_owned(),
        delimiter: delimiter.as_str(),
    };

    let start = href.find(delimiter.as_str()).ok_or_else(malformed)? + delimiter.as_str().len();
    let len = href[start..].find('\'').ok_or_else(malformed)?;
    Ok(non_empty(&href[start..start + len]).map(str::to_owned))
}

/// Warns if a unit of measurement is not the expected one.
pub fn check_uom(field: &str, uom: Option<&str>, expected: &str) {
    if let Some(uom) = uom {
        if !uom.eq_ignore_ascii_case(expected) {
            warn!("invalid units for {field} ({uom})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_none() {
        assert_eq!(boolean(""), None);
        assert_eq!(float("elevation", "  "), Ok(None));
        assert_eq!(position(""), Ok(None));
        assert_eq!(magnetic_variation(""), Ok(None));
        assert_eq!(reference("", Delimiter::Quoted), Ok(None));
    }

    #[test]
    fn xml_truthiness() {
        for s in ["t", "TRUE", "1", "Y", "yes"] {
            assert_eq!(boolean(s), Some(true), "{s}");
        }
        for s in ["N", "no", "false", "0"] {
            assert_eq!(boolean(s), Some(false), "{s}");
        }
    }

    #[test]
    fn parses_position_as_lon_lat() {
        assert_eq!(
            position("-149.9963 61.1744"),
            Ok(Some((-149.9963, 61.1744)))
        );
        assert!(position("-149.9963").is_err());
    }

    #[test]
    fn parses_magnetic_variation() {
        assert_eq!(magnetic_variation("-14.5"), Ok(Some(-14.5)));
        assert_eq!(magnetic_variation("14W"), Ok(Some(-14.0)));
        assert_eq!(magnetic_variation("3E"), Ok(Some(3.0)));
        assert!(magnetic_variation("WEST").is_err());
    }

    #[test]
    fn parses_quoted_reference() {
        let href = "urn:uuid:AirportHeliport[@id='AH_0000001']";
        assert_eq!(
            reference(href, Delimiter::Quoted),
            Ok(Some("AH_0000001".to_string()))
        );
    }

    #[test]
    fn parses_spaced_reference() {
        let href = "RadioCommunicationChannel[@id ='RCC_0000042']";
        assert_eq!(
            reference(href, Delimiter::Spaced),
            Ok(Some("RCC_0000042".to_string()))
        );
        // the two conventions are not interchangeable
        assert!(reference(href, Delimiter::Quoted).is_err());
    }

    #[test]
    fn unterminated_reference_fails() {
        assert!(reference("AirportHeliport[@id='AH_1", Delimiter::Quoted).is_err());
    }
}
