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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The line starts with a record type the family does not know.
    UnknownRecordType { prefix: String },
    /// The line ends before the start of one of the record's columns.
    RecordTooShort {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A non-empty value does not match the column's grammar.
    MalformedValue {
        expected: &'static str,
        value: String,
    },
}

impl Error {
    pub(crate) fn malformed(expected: &'static str, value: &str) -> Self {
        Self::MalformedValue {
            expected,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRecordType { prefix } => write!(f, "unknown record type '{prefix}'"),
            Self::RecordTooShort {
                kind,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{kind} record should be at least {expected} byte long but is {actual}"
                )
            }
            Self::MalformedValue { expected, value } => {
                write!(f, "\"{value}\" should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}
