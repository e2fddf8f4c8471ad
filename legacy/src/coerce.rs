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

//! Coercion of fixed-width text values.
//!
//! All functions return `Ok(None)` for empty input. The grammars are the
//! ones of the legacy text products and intentionally differ from the AIXM
//! ones (e.g. only `T` and `Y` are true here).

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::Error;

static COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<deg>[0-9]{2,3})-(?P<min>[0-9]{2})-(?P<sec>[0-9.]{5,9})(?P<dir>[NSEW])")
        .expect("valid regex")
});

static COMPACT_COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<digits>[0-9]{6,7})(?P<frac>\.[0-9]*)?(?P<dir>[NSEW])$").expect("valid regex")
});

static MAGNETIC_VARIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<var>[0-9]{1,2})(?P<dir>[EW])").expect("valid regex"));

static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<gradient>[0-9.]{1,6})(?P<direction>[A-Z]{2,4})?").expect("valid regex")
});

static OBSTACLE_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<dist>[0-9]{1,6})(?P<dir>[LRB])?").expect("valid regex"));

static OBSTACLE_DISTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<dist>[0-9]{1,6})").expect("valid regex"));

/// Layout of a date column.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DateLayout {
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `MM/YYYY`, the first of the month.
    MonthYear,
    /// `MMDDYYYY`
    Compact,
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Returns `true` for `T` or `Y` and `false` for any other value.
pub fn boolean(s: &str) -> Option<bool> {
    non_empty(s).map(|s| s == "T" || s == "Y")
}

/// Returns `true` if the position or elevation was surveyed (`S`).
pub fn surveyed(s: &str) -> Option<bool> {
    non_empty(s).map(|s| s == "S")
}

/// Parses a number and truncates it towards zero. Some integer columns carry
/// a decimal point.
///
/// # Errors
///
/// Returns an error if the value is not a number.
pub fn integer(s: &str) -> Result<Option<i64>, Error> {
    Ok(float(s)?.map(|v| v.trunc() as i64))
}

/// # Errors
///
/// Returns an error if the value is not a number.
pub fn float(s: &str) -> Result<Option<f64>, Error> {
    non_empty(s)
        .map(|v| v.parse().map_err(|_| Error::malformed("a number", v)))
        .transpose()
}

/// Parses a coordinate into signed decimal degrees.
///
/// The regular form is `DD-MM-SS.SSSSH` or `DDD-MM-SS.SSSSH` with the
/// hemisphere `H`. The compact form `DDMMSS.SSSH` or `DDDMMSS.SSSH` is
/// accepted as well. South and west are negative.
///
/// # Examples
///
/// ```
/// use nasr_legacy::coerce::coordinate;
///
/// let lat = coordinate("61-10-27.0000N").unwrap().unwrap();
/// assert!((lat - 61.174166).abs() < 1e-6);
///
/// let lon = coordinate("1495959.5000W").unwrap().unwrap();
/// assert!((lon + 149.999861).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns an error if neither form matches.
pub fn coordinate(s: &str) -> Result<Option<f64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let malformed = || Error::malformed("a coordinate", v);

    let (deg, min, sec, dir) = if let Some(caps) = COORDINATE.captures(v) {
        (
            caps["deg"].parse::<f64>(),
            caps["min"].parse::<f64>(),
            caps["sec"].parse::<f64>(),
            caps.name("dir").map_or("", |m| m.as_str()),
        )
    } else if let Some(caps) = COMPACT_COORDINATE.captures(v) {
        let digits = &caps["digits"];
        let (deg, rest) = digits.split_at(digits.len() - 4);
        let frac = caps.name("frac").map_or("", |m| m.as_str());
        (
            deg.parse::<f64>(),
            rest[..2].parse::<f64>(),
            format!("{}{frac}", &rest[2..]).parse::<f64>(),
            caps.name("dir").map_or("", |m| m.as_str()),
        )
    } else {
        return Err(malformed());
    };

    let (Ok(deg), Ok(min), Ok(sec)) = (deg, min, sec) else {
        return Err(malformed());
    };

    let decimal = deg + min / 60.0 + sec / 3600.0;
    match dir {
        "S" | "W" => Ok(Some(-decimal)),
        _ => Ok(Some(decimal)),
    }
}

/// Parses a date to seconds since the Unix epoch, at midnight UTC.
///
/// # Errors
///
/// Returns an error if the value does not match the layout.
pub fn date(s: &str, layout: DateLayout) -> Result<Option<i64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let parsed = match layout {
        DateLayout::MonthDayYear => NaiveDate::parse_from_str(v, "%m/%d/%Y"),
        DateLayout::MonthYear => NaiveDate::parse_from_str(&format!("01/{v}"), "%d/%m/%Y"),
        DateLayout::Compact => NaiveDate::parse_from_str(v, "%m%d%Y"),
    };

    let date = parsed.map_err(|_| Error::malformed("a date", v))?;
    Ok(Some(date.and_time(NaiveTime::MIN).and_utc().timestamp()))
}

/// Parses a magnetic variation like `15E` into signed degrees, west is
/// negative.
///
/// # Errors
///
/// Returns an error if the value does not start with the degrees and the
/// direction.
pub fn magnetic_variation(s: &str) -> Result<Option<i64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let caps = MAGNETIC_VARIATION
        .captures(v)
        .ok_or_else(|| Error::malformed("a magnetic variation", v))?;
    let var: i64 = caps["var"].parse().unwrap_or_default();

    match &caps["dir"] {
        "W" => Ok(Some(-var)),
        _ => Ok(Some(var)),
    }
}

/// Parses a runway gradient like `0.3DOWN` in percent, downhill is negative.
///
/// # Errors
///
/// Returns an error if the value does not start with a number.
pub fn gradient(s: &str) -> Result<Option<f64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let malformed = || Error::malformed("a gradient", v);
    let caps = GRADIENT.captures(v).ok_or_else(malformed)?;
    let gradient: f64 = caps["gradient"].parse().map_err(|_| malformed())?;

    match caps.name("direction").map(|m| m.as_str()) {
        Some("DOWN") => Ok(Some(-gradient)),
        _ => Ok(Some(gradient)),
    }
}

/// Parses the lateral offset of an obstacle from the runway centerline in
/// feet. Left is negative; `R` and `B` (both sides) are positive.
///
/// # Errors
///
/// Returns an error if the value does not start with a distance.
pub fn obstacle_offset(s: &str) -> Result<Option<i64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let caps = OBSTACLE_OFFSET
        .captures(v)
        .ok_or_else(|| Error::malformed("an obstacle offset", v))?;
    let dist: i64 = caps["dist"].parse().unwrap_or_default();

    match caps.name("dir").map(|m| m.as_str()) {
        Some("L") => Ok(Some(-dist)),
        _ => Ok(Some(dist)),
    }
}

/// Parses the distance of an obstacle from the runway end in feet.
///
/// # Errors
///
/// Returns an error if the value does not start with a distance.
pub fn obstacle_distance(s: &str) -> Result<Option<i64>, Error> {
    let Some(v) = non_empty(s) else {
        return Ok(None);
    };

    let caps = OBSTACLE_DISTANCE
        .captures(v)
        .ok_or_else(|| Error::malformed("an obstacle distance", v))?;
    Ok(Some(caps["dist"].parse().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_none() {
        assert_eq!(boolean(" "), None);
        assert_eq!(surveyed(""), None);
        assert_eq!(integer(""), Ok(None));
        assert_eq!(float("  "), Ok(None));
        assert_eq!(magnetic_variation(""), Ok(None));
        assert_eq!(obstacle_distance(" "), Ok(None));
        assert_eq!(coordinate("   "), Ok(None));
        assert_eq!(date("", DateLayout::MonthYear), Ok(None));
        assert_eq!(gradient(""), Ok(None));
        assert_eq!(obstacle_offset(""), Ok(None));
    }

    #[test]
    fn legacy_truthiness() {
        assert_eq!(boolean("T"), Some(true));
        assert_eq!(boolean("Y"), Some(true));
        assert_eq!(boolean("N"), Some(false));
        // unlike the AIXM files, "yes" is not true here
        assert_eq!(boolean("yes"), Some(false));
        assert_eq!(surveyed("S"), Some(true));
        assert_eq!(surveyed("E"), Some(false));
    }

    #[test]
    fn parses_coordinate_sign_and_magnitude() {
        let lat = coordinate("40-38-23.7400N").unwrap().unwrap();
        assert!((lat - 40.639927).abs() < 1e-6);

        let lon = coordinate("073-46-43.2920W").unwrap().unwrap();
        assert!((lon + 73.778692).abs() < 1e-6);

        let south = coordinate("33-56-32.0000S").unwrap().unwrap();
        assert!(south < 0.0);
    }

    #[test]
    fn parses_compact_coordinate() {
        let lat = coordinate("403823.740N").unwrap().unwrap();
        assert!((lat - 40.639927).abs() < 1e-6);

        let lon = coordinate("0734643.292W").unwrap().unwrap();
        assert!((lon + 73.778692).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_coordinate() {
        assert!(coordinate("N40-38").is_err());
    }

    #[test]
    fn truncates_integers() {
        assert_eq!(integer("1975"), Ok(Some(1975)));
        assert_eq!(integer("12.9"), Ok(Some(12)));
        assert!(integer("12A").is_err());
    }

    #[test]
    fn parses_dates_as_epoch_seconds() {
        assert_eq!(date("01/02/1970", DateLayout::MonthDayYear), Ok(Some(86400)));
        assert_eq!(date("02/1970", DateLayout::MonthYear), Ok(Some(31 * 86400)));
        assert_eq!(date("01021970", DateLayout::Compact), Ok(Some(86400)));
        assert_eq!(date("12/31/1969", DateLayout::MonthDayYear), Ok(Some(-86400)));
        assert!(date("1970-01-02", DateLayout::MonthDayYear).is_err());
    }

    #[test]
    fn parses_magnetic_variation() {
        assert_eq!(magnetic_variation("15E"), Ok(Some(15)));
        assert_eq!(magnetic_variation("06W"), Ok(Some(-6)));
        assert!(magnetic_variation("E15").is_err());
    }

    #[test]
    fn parses_gradient() {
        assert_eq!(gradient("0.3DOWN"), Ok(Some(-0.3)));
        assert_eq!(gradient("0.5UP"), Ok(Some(0.5)));
        assert_eq!(gradient("1.2"), Ok(Some(1.2)));
    }

    #[test]
    fn parses_obstacle_offset_and_distance() {
        assert_eq!(obstacle_offset("250L"), Ok(Some(-250)));
        assert_eq!(obstacle_offset("250R"), Ok(Some(250)));
        assert_eq!(obstacle_offset("0B"), Ok(Some(0)));
        assert_eq!(obstacle_distance("1200"), Ok(Some(1200)));
        assert!(obstacle_distance("FAR").is_err());
    }
}
