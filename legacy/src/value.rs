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

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A coerced column value.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Seconds since the Unix epoch.
    Timestamp(i64),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns integers and timestamps.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) | Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// One decoded line of a legacy text product.
#[derive(Clone, PartialEq, Debug)]
pub struct LegacyRecord {
    /// The record type, e.g. `APT` or `FIX1`.
    pub kind: &'static str,
    /// One-based line number within the file.
    pub line: usize,
    /// The columns in layout order.
    pub fields: Vec<(&'static str, Value)>,
}

impl LegacyRecord {
    /// Returns the value of the column `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

impl Serialize for LegacyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("record_type", self.kind)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_values() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());

        assert_eq!(Value::Integer(151).as_i64(), Some(151));
        assert_eq!(Value::Timestamp(1_727_913_600).as_i64(), Some(1_727_913_600));
        assert_eq!(Value::Float(151.9).as_i64(), None);

        assert_eq!(Value::Integer(15).as_f64(), Some(15.0));
        assert_eq!(Value::Text("15E".to_string()).as_f64(), None);

        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::Text("ANC".to_string()).as_str(), Some("ANC"));
    }

    #[test]
    fn looks_up_fields_by_name() {
        let record = LegacyRecord {
            kind: "FIX1",
            line: 3,
            fields: vec![("id", Value::Text("AADEN".to_string())), ("state", Value::Null)],
        };

        assert_eq!(record.get("id").and_then(Value::as_str), Some("AADEN"));
        assert!(record.get("state").is_some_and(Value::is_null));
        assert_eq!(record.get("region"), None);
    }
}
