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

//! ICAO abbreviations used in NOTAMs (ICAO Doc 8400).

/// Abbreviations with their expansion.
pub const ICAO_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ABN", "aerodrome beacon"),
    ("ABV", "above"),
    ("ACC", "area control centre"),
    ("ACFT", "aircraft"),
    ("ACT", "active"),
    ("AD", "aerodrome"),
    ("ADJ", "adjacent"),
    ("AFIS", "aerodrome flight information service"),
    ("AGL", "above ground level"),
    ("ALS", "approach lighting system"),
    ("ALT", "altitude"),
    ("ALTN", "alternate"),
    ("AMDT", "amendment"),
    ("AMSL", "above mean sea level"),
    ("APCH", "approach"),
    ("APN", "apron"),
    ("APP", "approach control office"),
    ("APR", "April"),
    ("ARP", "aerodrome reference point"),
    ("ASPH", "asphalt"),
    ("ATC", "air traffic control"),
    ("ATIS", "automatic terminal information service"),
    ("ATS", "air traffic services"),
    ("AUG", "August"),
    ("AVBL", "available"),
    ("AWY", "airway"),
    ("AZM", "azimuth"),
    ("BCN", "beacon"),
    ("BLW", "below"),
    ("BRG", "bearing"),
    ("BTN", "between"),
    ("CAT", "category"),
    ("CL", "centre line"),
    ("CLSD", "closed"),
    ("CNL", "cancel"),
    ("COM", "communications"),
    ("CONST", "construction"),
    ("CTA", "control area"),
    ("CTR", "control zone"),
    ("DA", "decision altitude"),
    ("DEC", "December"),
    ("DEP", "depart"),
    ("DER", "departure end of the runway"),
    ("DIST", "distance"),
    ("DLY", "daily"),
    ("DME", "distance measuring equipment"),
    ("DTHR", "displaced runway threshold"),
    ("EFF", "effective"),
    ("ELEV", "elevation"),
    ("ENR", "en route"),
    ("EQPT", "equipment"),
    ("EST", "estimated"),
    ("EXC", "except"),
    ("FAF", "final approach fix"),
    ("FEB", "February"),
    ("FIR", "flight information region"),
    ("FIS", "flight information service"),
    ("FLG", "flashing"),
    ("FLT", "flight"),
    ("FM", "from"),
    ("FREQ", "frequency"),
    ("FRI", "Friday"),
    ("FT", "feet"),
    ("GND", "ground"),
    ("GP", "glide path"),
    ("H24", "continuous day and night service"),
    ("HEL", "helicopter"),
    ("HGT", "height"),
    ("HJ", "sunrise to sunset"),
    ("HN", "sunset to sunrise"),
    ("HR", "hours"),
    ("IAP", "instrument approach procedure"),
    ("IFR", "instrument flight rules"),
    ("ILS", "instrument landing system"),
    ("INFO", "information"),
    ("INOP", "inoperative"),
    ("INSTL", "installation"),
    ("INT", "intersection"),
    ("JAN", "January"),
    ("JUL", "July"),
    ("JUN", "June"),
    ("KM", "kilometres"),
    ("LDG", "landing"),
    ("LGT", "light"),
    ("LGTD", "lighted"),
    ("LLZ", "localizer"),
    ("LOC", "localizer"),
    ("MAG", "magnetic"),
    ("MAINT", "maintenance"),
    ("MAR", "March"),
    ("MAX", "maximum"),
    ("MIL", "military"),
    ("MIN", "minutes"),
    ("MNM", "minimum"),
    ("MON", "Monday"),
    ("MSA", "minimum sector altitude"),
    ("MSL", "mean sea level"),
    ("NAV", "navigation"),
    ("NDB", "non-directional radio beacon"),
    ("NM", "nautical miles"),
    ("NML", "normal"),
    ("NOV", "November"),
    ("NR", "number"),
    ("OBST", "obstacle"),
    ("OCT", "October"),
    ("OPR", "operator"),
    ("OPS", "operations"),
    ("PAPI", "precision approach path indicator"),
    ("PERM", "permanent"),
    ("PJE", "parachute jumping exercise"),
    ("PPR", "prior permission required"),
    ("PSN", "position"),
    ("RAD", "radius"),
    ("RDO", "radio"),
    ("REF", "reference"),
    ("RMK", "remark"),
    ("RTE", "route"),
    ("RWY", "runway"),
    ("SAT", "Saturday"),
    ("SEP", "September"),
    ("SFC", "surface"),
    ("SID", "standard instrument departure"),
    ("SR", "sunrise"),
    ("SS", "sunset"),
    ("STAR", "standard instrument arrival"),
    ("SUN", "Sunday"),
    ("SVC", "service"),
    ("TEMPO", "temporary"),
    ("TFC", "traffic"),
    ("THR", "threshold"),
    ("THU", "Thursday"),
    ("TIL", "until"),
    ("TKOF", "take-off"),
    ("TMA", "terminal control area"),
    ("TUE", "Tuesday"),
    ("TWR", "aerodrome control tower"),
    ("TWY", "taxiway"),
    ("UFN", "until further notice"),
    ("UNL", "unlimited"),
    ("VFR", "visual flight rules"),
    ("VIS", "visibility"),
    ("VOR", "VHF omnidirectional radio range"),
    ("WED", "Wednesday"),
    ("WEF", "with effect from"),
    ("WI", "within"),
    ("WIP", "work in progress"),
    ("WKN", "weaken"),
    ("WX", "weather"),
];
