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

//! Letter coded fields of the Q) clause.

use std::collections::BTreeSet;

letter_codes! {
    /// Traffic affected by a NOTAM.
    pub enum TrafficType {
        Ifr = ('I', "IFR"),
        Vfr = ('V', "VFR"),
        Checklist = ('K', "CHECKLIST"),
    }
}

letter_codes! {
    /// Purpose of a NOTAM.
    pub enum Purpose {
        /// Selected for immediate attention of aircraft operators.
        ImmediateAttention = ('N', "IMMEDIATE ATTENTION"),
        /// Selected for pre-flight information bulletins.
        OperationalSignificance = ('B', "OPERATIONAL SIGNIFICANCE"),
        /// Concerning flight operations.
        FlightOperations = ('O', "FLIGHT OPERATIONS"),
        Misc = ('M', "MISC"),
        Checklist = ('K', "CHECKLIST"),
    }
}

letter_codes! {
    /// Scope of a NOTAM.
    pub enum Scope {
        Aerodrome = ('A', "AERODROME"),
        EnRoute = ('E', "EN-ROUTE"),
        NavWarning = ('W', "NAV WARNING"),
        Checklist = ('K', "CHECKLIST"),
    }
}

/// Decodes the letters of a coded field into the set of labels.
///
/// Letters without a meaning in `codes` are skipped.
pub(crate) fn decode_codes<T>(letters: &str, codes: &[(char, T)]) -> BTreeSet<T>
where
    T: Copy + Ord,
{
    letters
        .chars()
        .filter_map(|letter| {
            codes
                .iter()
                .find(|(code, _)| *code == letter)
                .map(|(_, label)| *label)
        })
        .collect()
}
