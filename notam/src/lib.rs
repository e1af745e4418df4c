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

//! ICAO NOTAM parser.
//!
//! This crate parses a NOTAM in the ICAO format into a [`Notam`]. The text
//! is matched by the NOTAM [grammar] into a parse tree which is then reduced
//! into the NOTAM's fields. Free text items keep their byte range within the
//! NOTAM, so that ICAO abbreviations can be written out later without
//! touching the rest of the text.
//!
//! # Examples
//!
//! Lets parse a danger area activation and decode its abbreviations:
//!
//! ```
//! use notam::{Notam, NotamType, TrafficType};
//!
//! # fn main() -> Result<(), notam::Error> {
//! let notam: Notam = "(A0623/91 NOTAMN
//! Q) EGXX/QRDCA/IV/NBO/W/000/400/5510N00520W050
//! A) EGTT EGPX B) 9104030730 C) 9104281500
//! D) APR 03 07 12 21 24 AND 28 0730 TO 1500
//! E) DANGER AREA DXX IS ACTIVE
//! F) GND G) 12 200 m (40 000 ft) MSL.)"
//!     .parse()?;
//!
//! assert_eq!(notam.notam_type, NotamType::New);
//! assert_eq!(notam.fir, "EGXX");
//! assert!(notam.traffic_type.contains(&TrafficType::Vfr));
//! assert_eq!(notam.location, vec!["EGTT", "EGPX"]);
//! assert_eq!(notam.limit_lower.as_deref(), Some("GND"));
//!
//! // only the items D to G are decoded
//! assert!(notam.decoded().ends_with("F) ground G) 12 200 m (40 000 ft) mean sea level.)"));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod abbr;
mod codes;
mod decode;
mod error;
mod record;
mod reduce;
mod tree;

pub mod grammar;

pub use abbr::ICAO_ABBREVIATIONS;
pub use codes::{Purpose, Scope, TrafficType};
pub use decode::Abbreviations;
pub use error::Error;
pub use record::{Area, Item, Notam, NotamType, Part, ValidTill};
pub use tree::Node;
