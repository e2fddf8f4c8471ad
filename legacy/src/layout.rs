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

//! Column layouts of the record families.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::coerce::{self, DateLayout};
use crate::records::{apt, awos, fix};
use crate::{Error, LegacyRecord, Value};

/// How the text of a column becomes a [`Value`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Coerce {
    Text,
    Integer,
    Float,
    Boolean,
    Coordinate,
    Date(DateLayout),
    Surveyed,
    MagneticVariation,
    Gradient,
    ObstacleOffset,
    ObstacleDistance,
}

impl Coerce {
    /// Converts the trimmed text of a column.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not match the coercion's grammar.
    pub fn apply(&self, s: &str) -> Result<Value, Error> {
        let value = match self {
            Self::Text => (!s.is_empty()).then(|| Value::Text(s.to_owned())),
            Self::Integer => coerce::integer(s)?.map(Value::Integer),
            Self::Float => coerce::float(s)?.map(Value::Float),
            Self::Boolean => coerce::boolean(s).map(Value::Bool),
            Self::Coordinate => coerce::coordinate(s)?.map(Value::Float),
            Self::Date(layout) => coerce::date(s, *layout)?.map(Value::Timestamp),
            Self::Surveyed => coerce::surveyed(s).map(Value::Bool),
            Self::MagneticVariation => coerce::magnetic_variation(s)?.map(Value::Integer),
            Self::Gradient => coerce::gradient(s)?.map(Value::Float),
            Self::ObstacleOffset => coerce::obstacle_offset(s)?.map(Value::Integer),
            Self::ObstacleDistance => coerce::obstacle_distance(s)?.map(Value::Integer),
        };

        Ok(value.unwrap_or(Value::Null))
    }
}

/// A named column at the zero-based, half-open byte range `start..end`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Column {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub coerce: Coerce,
}

impl Column {
    pub const fn new(name: &'static str, start: usize, end: usize, coerce: Coerce) -> Self {
        Self {
            name,
            start,
            end,
            coerce,
        }
    }

    /// Returns the trimmed text of the column. The end is clamped to the
    /// line.
    fn slice<'a>(&self, line: &'a [u8]) -> Cow<'a, str> {
        let end = self.end.min(line.len());
        let start = self.start.min(end);
        match String::from_utf8_lossy(&line[start..end]) {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_owned()),
        }
    }
}

/// A legacy text product.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Family {
    /// Airports (`APT.txt`)
    Apt,
    /// Fixes, reporting points and waypoints (`FIX.txt`)
    Fix,
    /// Automated weather observing systems (`AWOS.txt`)
    Awos,
}

impl Family {
    /// Length of the record type at the start of each line.
    pub fn prefix_len(&self) -> usize {
        match self {
            Self::Apt => 3,
            Self::Fix => 4,
            Self::Awos => 5,
        }
    }

    /// Returns the record type and its columns. Record types that are known
    /// but not decoded have no columns.
    pub fn layout(&self, prefix: &str) -> Option<(&'static str, &'static [Column])> {
        let layouts: &[(&'static str, &'static [Column])] = match self {
            Self::Apt => apt::LAYOUTS,
            Self::Fix => fix::LAYOUTS,
            Self::Awos => awos::LAYOUTS,
        };

        layouts.iter().find(|(kind, _)| *kind == prefix).copied()
    }

    /// Decodes one line.
    ///
    /// Returns `Ok(None)` for blank lines and for record types without
    /// columns. A value that does not match its column's grammar is logged
    /// and stored as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns an error if the record type is unknown or the line is too
    /// short for its columns.
    pub fn parse_line(&self, line: &str, number: usize) -> Result<Option<LegacyRecord>, Error> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let bytes = line.as_bytes();
        let prefix = String::from_utf8_lossy(&bytes[..self.prefix_len().min(bytes.len())]);
        let (kind, columns) = self
            .layout(&prefix)
            .ok_or_else(|| Error::UnknownRecordType {
                prefix: prefix.into_owned(),
            })?;

        if columns.is_empty() {
            return Ok(None);
        }

        let expected = columns.iter().map(|c| c.start).max().unwrap_or_default();
        if bytes.len() < expected {
            return Err(Error::RecordTooShort {
                kind,
                expected,
                actual: bytes.len(),
            });
        }

        let fields = columns
            .iter()
            .map(|column| {
                let text = column.slice(bytes);
                let value = column.coerce.apply(&text).unwrap_or_else(|e| {
                    warn!("line {number}: {kind} {}: {e}", column.name);
                    Value::Null
                });
                (column.name, value)
            })
            .collect();

        Ok(Some(LegacyRecord {
            kind,
            line: number,
            fields,
        }))
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apt" => Ok(Self::Apt),
            "fix" => Ok(Self::Fix),
            "awos" => Ok(Self::Awos),
            _ => Err(format!("unknown legacy product '{s}'")),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apt => "APT",
            Self::Fix => "FIX",
            Self::Awos => "AWOS",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_column_to_line() {
        let column = Column::new("remark", 4, 100, Coerce::Text);
        assert_eq!(column.slice(b"RMK  short remark  "), "short remark");
        assert_eq!(column.slice(b"RMK"), "");
    }

    #[test]
    fn skips_blank_lines_and_empty_layouts() {
        assert_eq!(Family::Fix.parse_line("   \r", 1), Ok(None));
        assert_eq!(Family::Fix.parse_line("FIX2 SOMETHING", 2), Ok(None));
        assert_eq!(Family::Awos.parse_line("AWOS2", 3), Ok(None));
    }

    #[test]
    fn rejects_unknown_record_type() {
        assert_eq!(
            Family::Apt.parse_line("XYZ 1234", 1),
            Err(Error::UnknownRecordType {
                prefix: "XYZ".to_string()
            })
        );
    }

    #[test]
    fn rejects_short_record() {
        assert!(matches!(
            Family::Apt.parse_line("RMK", 1),
            Err(Error::RecordTooShort { kind: "RMK", .. })
        ));
    }

    #[test]
    fn parses_family_names() {
        assert_eq!("apt".parse::<Family>(), Ok(Family::Apt));
        assert_eq!("AWOS".parse::<Family>(), Ok(Family::Awos));
        assert!("nav".parse::<Family>().is_err());
    }
}
