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

use crate::grammar::Rule;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// The input doesn't match the grammar. The position is the furthest
    /// byte offset the parser reached before failing in `rule`.
    Syntax { rule: Rule, position: usize },
    /// The start rule matched but left input unconsumed.
    TrailingInput { position: usize },
    /// Digits matched the grammar but don't form a valid calendar date.
    InvalidDateTime { position: usize },
    /// The parse tree doesn't have the shape the reducer expects for `rule`.
    UnexpectedStructure { rule: Rule },
    /// An abbreviation table couldn't be compiled into a matcher.
    InvalidAbbreviations(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { rule, position } => {
                write!(f, "expected {rule} at position {position}")
            }
            Self::TrailingInput { position } => {
                write!(f, "unexpected input at position {position}")
            }
            Self::InvalidDateTime { position } => {
                write!(f, "invalid date or time at position {position}")
            }
            Self::UnexpectedStructure { rule } => {
                write!(f, "parse tree of {rule} has an unexpected structure")
            }
            Self::InvalidAbbreviations(e) => {
                write!(f, "abbreviations can't be compiled: {e}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::InvalidAbbreviations(e.to_string())
    }
}
