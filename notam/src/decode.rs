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

//! Decoding of abbreviations in a NOTAM's free text.

use std::borrow::Cow;
use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::abbr::ICAO_ABBREVIATIONS;
use crate::error::Error;
use crate::record::{Item, Notam};

static ICAO: Lazy<Abbreviations> = Lazy::new(|| {
    Abbreviations::new(ICAO_ABBREVIATIONS.iter().copied())
        .expect("ICAO abbreviations should compile")
});

/// A table of abbreviations and their expansions.
///
/// Abbreviations are matched as whole words and case sensitive.
///
/// # Examples
///
/// ```
/// use notam::Abbreviations;
///
/// let abbreviations = Abbreviations::new([("RWY", "runway"), ("CLSD", "closed")])?;
/// assert_eq!(abbreviations.expand("RWY 09 CLSD"), "runway 09 closed");
/// assert_eq!(abbreviations.expand("RWYS CLSD"), "RWYS closed");
/// # Ok::<(), notam::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Abbreviations {
    table: HashMap<String, String>,
    pattern: Option<Regex>,
}

impl Abbreviations {
    /// Creates a table from abbreviation and expansion pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is too large to be matched.
    pub fn new<I, K, V>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let pattern = if table.is_empty() {
            None
        } else {
            // longer keys first, so the longest abbreviation wins
            let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
            keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

            let alternation = keys
                .into_iter()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\b(?:{alternation})\b"))?)
        };

        Ok(Self { table, pattern })
    }

    /// Returns the ICAO abbreviations.
    pub fn icao() -> &'static Self {
        &ICAO
    }

    /// Returns the expansion of an abbreviation.
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.table.get(abbreviation).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Writes out all abbreviations in `text`.
    ///
    /// Words that aren't abbreviations are left as they are.
    pub fn expand<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, |caps: &Captures<'_>| {
                match self.table.get(&caps[0]) {
                    Some(expansion) => expansion.clone(),
                    None => caps[0].to_string(),
                }
            }),
            None => Cow::Borrowed(text),
        }
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self::icao().clone()
    }
}

/// Returns the NOTAM's full text with abbreviations in the free text items
/// written out.
///
/// Only the items D to G are decoded. Everything between them, including the
/// item letters, is copied as is.
pub(crate) fn decode(notam: &Notam, abbreviations: &Abbreviations) -> String {
    let text = notam.full_text.as_str();

    let mut ranges: Vec<_> = Item::FREE_TEXT
        .iter()
        .filter_map(|&item| notam.indices(item))
        .collect();
    ranges.sort_by_key(|range| range.start);

    let mut decoded = String::with_capacity(text.len());
    let mut copied = 0;

    for range in ranges {
        trace!("decoding {range:?} of NOTAM {}", notam.notam_id);

        decoded.push_str(&text[copied..range.start]);
        decoded.push_str(&abbreviations.expand(&text[range.clone()]));
        copied = range.end;
    }

    decoded.push_str(&text[copied..]);
    decoded
}
