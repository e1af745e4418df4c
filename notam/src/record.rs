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

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codes::{Purpose, Scope, TrafficType};
use crate::decode::{self, Abbreviations};
use crate::error::Error;
use crate::grammar::{self, Rule};
use crate::reduce;

/// The type of a NOTAM as given by its header.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotamType {
    /// A NOTAM containing new information (`NOTAMN`).
    New,
    /// A NOTAM replacing a previous NOTAM (`NOTAMR`).
    Replace,
    /// A NOTAM cancelling a previous NOTAM (`NOTAMC`).
    Cancel,
}

impl fmt::Display for NotamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Replace => write!(f, "REPLACE"),
            Self::Cancel => write!(f, "CANCEL"),
        }
    }
}

/// Approximate circle that encompasses the whole area of influence.
///
/// Latitude and longitude are kept as coded in the NOTAM, e.g. `5510N` and
/// `00520W`. The radius is given in nautical miles.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Area {
    pub lat: String,
    pub long: String,
    pub radius: u16,
}

/// Part `n` of `m` of a NOTAM that is split across several messages.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    pub n: u8,
    pub of: u8,
}

/// The end of a NOTAM's validity.
///
/// An expiry compares, orders and hashes by its instant only, so an estimated
/// expiry equals the date and time it was estimated for, both as a
/// [`DateTime`] and as another `ValidTill`. Whether it is estimated or
/// permanent is told by [`is_estimated`] and [`is_permanent`].
///
/// [`is_estimated`]: ValidTill::is_estimated
/// [`is_permanent`]: ValidTill::is_permanent
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidTill {
    instant: DateTime<Utc>,
    estimated: bool,
}

impl ValidTill {
    /// A firm expiry at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            estimated: false,
        }
    }

    /// An expiry estimated for `instant`.
    pub fn estimated(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            estimated: true,
        }
    }

    /// An expiry that never comes, i.e. the maximum date and time.
    pub fn permanent() -> Self {
        Self::new(DateTime::<Utc>::MAX_UTC)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn is_estimated(&self) -> bool {
        self.estimated
    }

    pub fn is_permanent(&self) -> bool {
        self.instant == DateTime::<Utc>::MAX_UTC
    }
}

impl From<DateTime<Utc>> for ValidTill {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl PartialEq for ValidTill {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for ValidTill {}

impl Hash for ValidTill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl PartialOrd for ValidTill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValidTill {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl PartialEq<DateTime<Utc>> for ValidTill {
    fn eq(&self, other: &DateTime<Utc>) -> bool {
        self.instant == *other
    }
}

impl PartialOrd<DateTime<Utc>> for ValidTill {
    fn partial_cmp(&self, other: &DateTime<Utc>) -> Option<Ordering> {
        self.instant.partial_cmp(other)
    }
}

impl fmt::Display for ValidTill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_permanent() {
            write!(f, "PERM")
        } else if self.estimated {
            write!(f, "{} EST", self.instant.format("%Y-%m-%d %H:%M"))
        } else {
            write!(f, "{}", self.instant.format("%Y-%m-%d %H:%M"))
        }
    }
}

/// A lettered item (clause) of a NOTAM.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Item {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Item {
    /// Items with free text that may contain abbreviations.
    pub const FREE_TEXT: [Item; 4] = [Self::D, Self::E, Self::F, Self::G];
}

/// A parsed NOTAM.
///
/// Byte ranges of the items are given as `indices_item_*` and index into
/// [`full_text`](Notam::full_text). They cover the item's content without
/// the leading item letter, e.g. `E)`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notam {
    /// The text the NOTAM was parsed from.
    pub full_text: String,
    /// Series and number/year, e.g. `A0623/91`.
    pub notam_id: String,
    pub notam_type: NotamType,
    /// The NOTAM replaced or cancelled by this NOTAM.
    pub ref_notam_id: Option<String>,
    /// The FIR within which the subject of the information is located.
    pub fir: String,
    /// The five letter NOTAM code starting with `Q`.
    pub notam_code: String,
    pub traffic_type: BTreeSet<TrafficType>,
    pub purpose: BTreeSet<Purpose>,
    pub scope: BTreeSet<Scope>,
    /// Lower vertical limit as flight level.
    pub fl_lower: u16,
    /// Upper vertical limit as flight level.
    pub fl_upper: u16,
    pub area: Area,
    /// ICAO location indicators of the aerodromes or FIRs concerned.
    pub location: Vec<String>,
    pub part: Option<Part>,
    pub valid_from: DateTime<Utc>,
    /// End of validity, if given. Missing e.g. for cancelling NOTAMs.
    pub valid_till: Option<ValidTill>,
    /// Schedule of activity within the validity (D).
    pub schedule: Option<String>,
    /// Plain language text of the NOTAM (E).
    pub body: String,
    /// Lower height limit (F).
    pub limit_lower: Option<String>,
    /// Upper height limit (G).
    pub limit_upper: Option<String>,
    pub source: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub indices_item_a: Range<usize>,
    pub indices_item_b: Range<usize>,
    pub indices_item_c: Option<Range<usize>>,
    pub indices_item_d: Option<Range<usize>>,
    pub indices_item_e: Range<usize>,
    pub indices_item_f: Option<Range<usize>>,
    pub indices_item_g: Option<Range<usize>>,
}

impl Notam {
    /// Parses a NOTAM.
    ///
    /// # Errors
    ///
    /// Returns an error if the text isn't a NOTAM in ICAO format.
    ///
    /// # Examples
    ///
    /// ```
    /// use notam::{Notam, NotamType};
    ///
    /// let notam = Notam::parse(
    ///     "(A0126/15 NOTAMR A0074/14
    /// Q) LLLL/QARAU/IV/NBO/E/000/999/3250N03459E001
    /// A) LLLL B) 1501130901 C) PERM
    /// E) ATS RTE `H4A` NOT AVBL UFN.)",
    /// )?;
    ///
    /// assert_eq!(notam.notam_type, NotamType::Replace);
    /// assert_eq!(notam.ref_notam_id.as_deref(), Some("A0074/14"));
    /// # Ok::<(), notam::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, Error> {
        debug!("parsing NOTAM of {} bytes", s.len());

        let tree = grammar::parse(Rule::Root, s)?;
        let notam = reduce::notam(&tree, s)?;

        debug!("parsed NOTAM {} ({})", notam.notam_id, notam.notam_type);
        Ok(notam)
    }

    /// Returns the byte range of the item's content, if the item exists.
    pub fn indices(&self, item: Item) -> Option<Range<usize>> {
        match item {
            Item::A => Some(self.indices_item_a.clone()),
            Item::B => Some(self.indices_item_b.clone()),
            Item::C => self.indices_item_c.clone(),
            Item::D => self.indices_item_d.clone(),
            Item::E => Some(self.indices_item_e.clone()),
            Item::F => self.indices_item_f.clone(),
            Item::G => self.indices_item_g.clone(),
        }
    }

    /// Returns the item's content as found in the full text.
    pub fn item_text(&self, item: Item) -> Option<&str> {
        self.indices(item).and_then(|range| self.full_text.get(range))
    }

    /// Returns the full text with ICAO abbreviations in the items D to G
    /// written out.
    pub fn decoded(&self) -> String {
        self.decoded_with(Abbreviations::icao())
    }

    /// Returns the full text with the `abbreviations` in the items D to G
    /// written out.
    pub fn decoded_with(&self, abbreviations: &Abbreviations) -> String {
        decode::decode(self, abbreviations)
    }
}

impl FromStr for Notam {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
