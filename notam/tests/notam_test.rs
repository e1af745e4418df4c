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

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use notam::grammar::{self, Rule};
use notam::{Area, Error, Item, Notam, NotamType, Part, Purpose, Scope, TrafficType, ValidTill};

const A0623_91: &str = include_str!("data/A0623_91.txt");
const A0126_15: &str = include_str!("data/476008.txt");
const C2661_23: &str = include_str!("data/C2661_23.txt");

const ALL: [&str; 3] = [A0623_91, A0126_15, C2661_23];

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("date should be valid")
}

fn parse(text: &str) -> Notam {
    text.parse().expect("NOTAM should parse")
}

#[test]
fn parses_new_notam() {
    let notam = parse(A0623_91);

    assert_eq!(notam.full_text, A0623_91);
    assert_eq!(notam.notam_id, "A0623/91");
    assert_eq!(notam.notam_type, NotamType::New);
    assert_eq!(notam.ref_notam_id, None);
    assert_eq!(notam.fir, "EGXX");
    assert_eq!(notam.notam_code, "QRDCA");
    assert_eq!(
        notam.traffic_type,
        BTreeSet::from([TrafficType::Ifr, TrafficType::Vfr])
    );
    assert_eq!(
        notam.purpose,
        BTreeSet::from([
            Purpose::ImmediateAttention,
            Purpose::OperationalSignificance,
            Purpose::FlightOperations,
        ])
    );
    assert_eq!(notam.scope, BTreeSet::from([Scope::NavWarning]));
    assert_eq!(notam.fl_lower, 0);
    assert_eq!(notam.fl_upper, 400);
    assert_eq!(
        notam.area,
        Area {
            lat: "5510N".to_string(),
            long: "00520W".to_string(),
            radius: 50,
        }
    );
    assert_eq!(notam.location, vec!["EGTT", "EGPX"]);
    assert_eq!(notam.part, None);
    assert_eq!(notam.valid_from, utc(1991, 4, 3, 7, 30));
    assert_eq!(notam.valid_till, Some(ValidTill::new(utc(1991, 4, 28, 15, 0))));
    assert_eq!(
        notam.schedule.as_deref(),
        Some("APR 03 07 12 21 24 AND 28 0730 TO 1500")
    );
    assert_eq!(notam.body, "DANGER AREA DXX IS ACTIVE");
    assert_eq!(notam.limit_lower.as_deref(), Some("GND"));
    assert_eq!(notam.limit_upper.as_deref(), Some("12 200 m (40 000 ft) MSL."));
    assert_eq!(notam.created, None);
    assert_eq!(notam.source, None);
}

#[test]
fn parses_replacing_notam() {
    let notam = parse(A0126_15);

    assert_eq!(notam.notam_id, "A0126/15");
    assert_eq!(notam.notam_type, NotamType::Replace);
    assert_eq!(notam.ref_notam_id.as_deref(), Some("A0074/14"));
    assert_eq!(notam.fir, "LLLL");
    assert_eq!(notam.notam_code, "QARAU");
    assert_eq!(notam.scope, BTreeSet::from([Scope::EnRoute]));
    assert_eq!(notam.fl_lower, 0);
    assert_eq!(notam.fl_upper, 999);
    assert_eq!(notam.area.lat, "3250N");
    assert_eq!(notam.area.long, "03459E");
    assert_eq!(notam.area.radius, 1);
    assert_eq!(notam.location, vec!["LLLL"]);
    assert_eq!(notam.valid_from, utc(2015, 1, 13, 9, 1));
    assert_eq!(notam.valid_till, Some(ValidTill::permanent()));
    assert_eq!(notam.schedule, None);
    assert_eq!(notam.body, "ATS RTE `H4A` NOT AVBL UFN.");
    assert_eq!(notam.limit_lower, None);
    assert_eq!(notam.limit_upper, None);
    assert_eq!(notam.indices_item_d, None);
    assert_eq!(notam.indices_item_f, None);
    assert_eq!(notam.indices_item_g, None);
}

#[test]
fn parses_notam_with_trailers() {
    let notam = parse(C2661_23);

    assert_eq!(notam.notam_id, "C2661/23");
    assert_eq!(notam.fir, "EDMM");
    assert_eq!(notam.notam_code, "QOBCE");
    assert_eq!(notam.purpose, BTreeSet::from([Purpose::Misc]));
    assert_eq!(
        notam.scope,
        BTreeSet::from([Scope::Aerodrome, Scope::EnRoute])
    );
    assert_eq!(notam.fl_upper, 11);
    assert_eq!(notam.area.radius, 5);
    assert_eq!(notam.location, vec!["EDQA"]);
    assert_eq!(notam.valid_from, utc(2023, 8, 9, 4, 0));
    assert_eq!(notam.valid_till, Some(ValidTill::new(utc(2023, 11, 9, 23, 59))));
    assert_eq!(
        notam.body,
        "HIGH CRANES ERECTED WI GLIDER TFC PATTERN. PSN 495451N 0105449E\n\
         AND 495451N 0105450E. 0.3NM S OF ARP. ELEV 1001FT/197FT AGL. DAY AND\n\
         NIGHT MARKED."
    );
    assert_eq!(notam.created, Some(utc(2023, 8, 8, 13, 5)));
    assert_eq!(notam.source.as_deref(), Some("EUECYIYN"));
}

#[test]
fn parsing_is_deterministic() {
    for text in ALL {
        assert_eq!(parse(text), parse(text));
    }
}

#[test]
fn item_indices_cover_item_content() {
    let notam = parse(A0623_91);

    assert_eq!(notam.item_text(Item::A), Some("EGTT EGPX"));
    assert_eq!(notam.item_text(Item::B), Some("9104030730"));
    assert_eq!(notam.item_text(Item::C), Some("9104281500"));
    assert_eq!(
        notam.item_text(Item::D),
        Some("APR 03 07 12 21 24 AND 28 0730 TO 1500")
    );
    assert_eq!(notam.item_text(Item::E), Some("DANGER AREA DXX IS ACTIVE"));
    assert_eq!(notam.item_text(Item::F), Some("GND"));
    assert_eq!(notam.item_text(Item::G), Some("12 200 m (40 000 ft) MSL."));

    let notam = parse(A0126_15);
    assert_eq!(notam.item_text(Item::C), Some("PERM"));
    assert_eq!(notam.item_text(Item::D), None);
}

#[test]
fn decodes_free_text_items_only() {
    let notam = parse(A0126_15);
    let decoded = notam.decoded();

    assert!(decoded.starts_with("(A0126/15 NOTAMR A0074/14\nQ) LLLL/QARAU/IV/NBO/E/"));
    // PERM is an abbreviation too, but C) isn't free text
    assert!(decoded.contains("C) PERM\n"));
    assert!(decoded.ends_with(
        "E) air traffic services route `H4A` NOT available until further notice.)\n"
    ));
}

#[test]
fn decoding_preserves_text_outside_free_text_items() {
    for text in ALL {
        let notam = parse(text);
        let decoded = notam.decoded();

        let mut ranges: Vec<_> = Item::FREE_TEXT
            .iter()
            .filter_map(|&item| notam.indices(item))
            .collect();
        ranges.sort_by_key(|r| r.start);

        let first = ranges.first().expect("E) should exist");
        let last = ranges.last().expect("E) should exist");
        assert!(decoded.starts_with(&text[..first.start]));
        assert!(decoded.ends_with(&text[last.end..]));

        // text between items is copied verbatim and in order
        let mut pos = first.start;
        for pair in ranges.windows(2) {
            let gap = &text[pair[0].end..pair[1].start];
            let found = decoded[pos..].find(gap).expect("gap should be copied");
            pos += found + gap.len();
        }
    }
}

#[test]
fn decoding_without_abbreviations_is_identity() {
    let notam = parse(A0623_91);
    let none = notam::Abbreviations::new(Vec::<(&str, &str)>::new())
        .expect("abbreviations should compile");

    assert_eq!(notam.decoded_with(&none), A0623_91);
}

#[test]
fn parses_without_parentheses_and_spaces() {
    let notam = parse(
        "A0623/91 NOTAMN\n\
         Q)EGXX/QRDCA/IV/NBO/W/000/400/5510N00520W050\n\
         A)EGTT B)9104030730 C)9104281500 EST\n\
         E)DANGER AREA DXX IS ACTIVE",
    );

    assert_eq!(notam.fir, "EGXX");
    assert_eq!(notam.location, vec!["EGTT"]);
    assert_eq!(notam.body, "DANGER AREA DXX IS ACTIVE");

    let valid_till = notam.valid_till.expect("C) should be parsed");
    assert!(valid_till.is_estimated());
    assert_eq!(valid_till, utc(1991, 4, 28, 15, 0));
}

#[test]
fn parses_crlf_line_breaks() {
    fn lf(text: Option<&str>) -> Option<String> {
        text.map(|t| t.replace("\r\n", "\n"))
    }

    for text in ALL {
        let expected = parse(text);
        let notam = parse(&text.replace('\n', "\r\n"));

        assert_eq!(lf(Some(notam.body.as_str())), Some(expected.body.clone()));
        assert!(!notam.body.ends_with('\r'));
        assert_eq!(notam.source, expected.source);
        for item in [Item::A, Item::B, Item::C, Item::D, Item::E, Item::F, Item::G] {
            let text = notam.item_text(item);
            assert_eq!(lf(text), expected.item_text(item).map(str::to_string), "{item:?}");
            assert!(!text.is_some_and(|t| t.ends_with('\r')), "{item:?}");
        }
    }
}

#[test]
fn parses_cancelling_notam_without_expiry() {
    let notam = parse(
        "(A0075/14 NOTAMC A0074/14\n\
         Q) LLLL/QARAU/IV/NBO/E/000/999/3250N03459E001\n\
         A) LLLL B) 1401130901\n\
         E) REF A0074/14 CNL.)",
    );

    assert_eq!(notam.notam_type, NotamType::Cancel);
    assert_eq!(notam.ref_notam_id.as_deref(), Some("A0074/14"));
    assert_eq!(notam.valid_till, None);
    assert_eq!(notam.indices_item_c, None);
    assert_eq!(notam.body, "REF A0074/14 CNL.");
}

#[test]
fn parses_multi_part_locations() {
    let notam = parse(
        "(B0001/24 NOTAMN\n\
         Q) EDGG/QWMLW/IV/BO/W/000/150/5000N00800E050\n\
         A) EDGG EDMM PART 1 OF 2 B) 2401010000 C) 2401312359\n\
         E) MIL EXER.)",
    );

    assert_eq!(notam.location, vec!["EDGG", "EDMM"]);
    assert_eq!(notam.part, Some(Part { n: 1, of: 2 }));
    assert_eq!(notam.item_text(Item::A), Some("EDGG EDMM PART 1 OF 2"));
}

#[test]
fn parses_empty_letter_codes() {
    let notam = parse(
        "(A0623/91 NOTAMN\n\
         Q) EGXX/QRDCA///W/000/400/5510N00520W050\n\
         A) EGTT B) 9104030730\n\
         E) DANGER AREA DXX IS ACTIVE)",
    );

    assert!(notam.traffic_type.is_empty());
    assert!(notam.purpose.is_empty());
    assert_eq!(notam.scope, BTreeSet::from([Scope::NavWarning]));
}

#[test]
fn rejects_malformed_notams() {
    // E) is mandatory
    let err = "(A0623/91 NOTAMN\n\
               Q) EGXX/QRDCA/IV/NBO/W/000/400/5510N00520W050\n\
               A) EGTT B) 9104030730)"
        .parse::<Notam>()
        .expect_err("NOTAM should be rejected");
    assert!(matches!(err, Error::Syntax { .. }));

    // letters of the traffic type out of order
    assert!(A0623_91.replace("/IV/", "/VI/").parse::<Notam>().is_err());

    // month 13
    let err = A0623_91
        .replace("9104030730", "9113030730")
        .parse::<Notam>()
        .expect_err("NOTAM should be rejected");
    assert!(matches!(err, Error::InvalidDateTime { .. }));
}

#[test]
fn parses_clauses_of_fixtures() {
    for text in ALL {
        let lines: Vec<&str> = text.lines().collect();

        grammar::parse(Rule::Header, lines[0].trim_start_matches('(').trim())
            .expect("header should parse");
        grammar::parse(Rule::QClause, lines[1].trim()).expect("Q) should parse");

        let a_line = lines[2];
        let b = a_line.find(" B)").expect("B) should follow A)");
        grammar::parse(Rule::AClause, &a_line[..b]).expect("A) should parse");

        let c = a_line.find(" C)").expect("C) should follow B)");
        grammar::parse(Rule::BClause, &a_line[b + 1..c]).expect("B) should parse");
        grammar::parse(Rule::CClause, &a_line[c + 1..]).expect("C) should parse");
    }
}
