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

//! NOTAM grammar.
//!
//! The grammar is a set of named [rules](Rule), each defined by a parsing
//! expression built from sequences, ordered choices, repetitions and
//! terminals. It reads as follows, where `_` is one or more spaces, `__` is
//! any whitespace and `?`, `*` and `+` have their usual meaning:
//!
//! ```text
//! root           = "("? header __ q_clause __ a_clause __ b_clause __
//!                  (c_clause __)? (d_clause __)? e_clause (__ f_clause)?
//!                  (__ g_clause)? (__ created)? (__ source)? ")"? __?
//!
//! header         = notamn_header / notamr_header / notamc_header
//! notamn_header  = notam_id _ "NOTAMN"
//! notamr_header  = notam_id _ "NOTAMR" _ notam_id
//! notamc_header  = notam_id _ "NOTAMC" _ notam_id
//!
//! q_clause       = "Q)" fir "/" notam_code "/" traffic_type "/" purpose "/"
//!                  scope "/" lower_limit "/" upper_limit "/" area_of_effect
//! a_clause       = "A)" location_icao (_ location_icao)* (_ part)?
//! location_icao  = !"PART" icao_id
//! part           = "PART" _ int _ "OF" _ int
//! b_clause       = "B)" datetime
//! c_clause       = "C)" expiry
//! expiry         = datetime (" "* estimated)? / permanent
//! d_clause       = "D)" till_next_clause
//! e_clause       = "E)" till_next_clause
//! f_clause       = "F)" till_next_clause
//! g_clause       = "G)" till_next_clause
//! created        = "CREATED:" int2 _ month _ year _ int2 ":" int2 ":" int2
//! source         = "SOURCE:" till_next_clause
//! datetime       = int2 int2 int2 int2 int2
//! ```
//!
//! Spaces following a clause letter are optional. The letter codes of the
//! Q) clause accept their letters only in a fixed order (e.g. `IV` but not
//! `VI`) and each letter is optional. Free text clauses end where the next
//! clause starts; see [`till_next_clause`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::tree::{self, Node};

rules! {
    /// A named rule of the NOTAM grammar.
    ///
    /// Every node of a parse tree is tagged by the rule that matched it.
    pub enum Rule {
        Root = "root",
        Header = "header",
        NotamnHeader = "notamn_header",
        NotamrHeader = "notamr_header",
        NotamcHeader = "notamc_header",
        NotamId = "notam_id",
        QClause = "q_clause",
        Fir = "fir",
        NotamCode = "notam_code",
        TrafficType = "traffic_type",
        Purpose = "purpose",
        Scope = "scope",
        LowerLimit = "lower_limit",
        UpperLimit = "upper_limit",
        AreaOfEffect = "area_of_effect",
        AClause = "a_clause",
        LocationIcao = "location_icao",
        Part = "part",
        BClause = "b_clause",
        CClause = "c_clause",
        Expiry = "expiry",
        Estimated = "estimated",
        Permanent = "permanent",
        DClause = "d_clause",
        EClause = "e_clause",
        FClause = "f_clause",
        GClause = "g_clause",
        Created = "created",
        Source = "source",
        IcaoId = "icao_id",
        DateTime = "datetime",
        Int = "int",
        Int2 = "int2",
        Int3 = "int3",
        Month = "month",
        Year = "year",
        TillNextClause = "till_next_clause",
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses `input` starting at `rule`.
///
/// The rule must match the entire input.
///
/// # Errors
///
/// Returns an error if the input doesn't match the rule.
///
/// # Examples
///
/// ```
/// use notam::grammar::{self, Rule};
///
/// let header = grammar::parse(Rule::Header, "A0126/15 NOTAMR A0074/14").unwrap();
/// assert_eq!(header.children[0].rule, Rule::NotamrHeader);
/// ```
pub fn parse(rule: Rule, input: &str) -> Result<Node, Error> {
    tree::build(&GRAMMAR, rule, input)
}

/////////////////////////////////////////////////////////////////////////////
// Parsing Expressions
/////////////////////////////////////////////////////////////////////////////

/// A parsing expression.
pub(crate) enum Expr {
    /// Matches the exact string.
    Literal(&'static str),
    /// Matches a regular expression anchored at the current position.
    Pattern(&'static Lazy<Regex>),
    /// Matches by a function returning the end of the match.
    Scan(fn(&str, usize) -> Option<usize>),
    /// Matches another rule and adds its node to the tree.
    Ref(Rule),
    Seq(Vec<Expr>),
    /// Ordered choice; the first matching alternative wins.
    Choice(Vec<Expr>),
    Optional(Box<Expr>),
    ZeroOrMore(Box<Expr>),
    /// Negative lookahead; never consumes input.
    Not(Box<Expr>),
}

/// The rule definitions, indexed by [`Rule`].
pub(crate) struct Grammar {
    rules: Vec<Expr>,
}

impl Grammar {
    fn new() -> Self {
        Self {
            rules: Rule::ALL.iter().map(|&rule| define(rule)).collect(),
        }
    }

    #[inline]
    pub(crate) fn definition(&self, rule: Rule) -> &Expr {
        &self.rules[rule as usize]
    }
}

pub(crate) static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::new);

fn lit(s: &'static str) -> Expr {
    Expr::Literal(s)
}

fn r(rule: Rule) -> Expr {
    Expr::Ref(rule)
}

fn seq<const N: usize>(items: [Expr; N]) -> Expr {
    Expr::Seq(items.into())
}

fn opt(expr: Expr) -> Expr {
    Expr::Optional(Box::new(expr))
}

fn many(expr: Expr) -> Expr {
    Expr::ZeroOrMore(Box::new(expr))
}

/// One or more spaces.
fn sp() -> Expr {
    Expr::Pattern(&SPACES)
}

/// Optional spaces.
fn gap() -> Expr {
    Expr::Pattern(&GAP)
}

/// One or more whitespace characters including line breaks.
fn sep() -> Expr {
    Expr::Pattern(&SEPARATOR)
}

macro_rules! pattern {
    ($name:ident = $re:literal) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new(concat!("^(?:", $re, ")")).expect("pattern should compile"));
    };
}

pattern!(SPACES = " +");
pattern!(GAP = " *");
pattern!(SEPARATOR = "[ \t\r\n]+");
pattern!(TRAILING = "[ \t\r\n]*");
pattern!(NOTAM_ID = "[A-Z][0-9]{4}/[0-9]{2}");
pattern!(ICAO_ID = "[A-Z]{4}");
pattern!(NOTAM_CODE = "Q[A-Z]{4}");
pattern!(TRAFFIC_TYPE = "I?V?K?");
pattern!(PURPOSE = "N?B?O?M?K?");
pattern!(SCOPE = "A?E?W?K?");
pattern!(INT = "[0-9]");
pattern!(INT2 = "[0-9]{2}");
pattern!(INT3 = "[0-9]{3}");
pattern!(MONTH = "[a-zA-Z]{3}");
pattern!(YEAR = "[0-9]{4}");

/// Area of effect with its latitude, longitude and radius groups.
pub(crate) static AREA_OF_EFFECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lat>[0-9]{4}[NS])(?P<long>[0-9]{5}[EW])(?P<radius>[0-9]{3})")
        .expect("pattern should compile")
});

fn define(rule: Rule) -> Expr {
    use Rule::*;

    match rule {
        Root => seq([
            opt(lit("(")),
            r(Header),
            sep(),
            r(QClause),
            sep(),
            r(AClause),
            sep(),
            r(BClause),
            sep(),
            opt(seq([r(CClause), sep()])),
            opt(seq([r(DClause), sep()])),
            r(EClause),
            opt(seq([sep(), r(FClause)])),
            opt(seq([sep(), r(GClause)])),
            opt(seq([sep(), r(Created)])),
            opt(seq([sep(), r(Source)])),
            opt(lit(")")),
            Expr::Pattern(&TRAILING),
        ]),

        Header => Expr::Choice(vec![r(NotamnHeader), r(NotamrHeader), r(NotamcHeader)]),
        NotamnHeader => seq([r(NotamId), sp(), lit("NOTAMN")]),
        NotamrHeader => seq([r(NotamId), sp(), lit("NOTAMR"), sp(), r(NotamId)]),
        NotamcHeader => seq([r(NotamId), sp(), lit("NOTAMC"), sp(), r(NotamId)]),
        NotamId => Expr::Pattern(&NOTAM_ID),

        QClause => seq([
            lit("Q)"),
            gap(),
            r(Fir),
            lit("/"),
            r(NotamCode),
            lit("/"),
            r(TrafficType),
            gap(),
            lit("/"),
            r(Purpose),
            gap(),
            lit("/"),
            r(Scope),
            gap(),
            lit("/"),
            r(LowerLimit),
            lit("/"),
            r(UpperLimit),
            lit("/"),
            r(AreaOfEffect),
        ]),
        Fir => r(IcaoId),
        NotamCode => Expr::Pattern(&NOTAM_CODE),
        TrafficType => Expr::Pattern(&TRAFFIC_TYPE),
        Purpose => Expr::Pattern(&PURPOSE),
        Scope => Expr::Pattern(&SCOPE),
        LowerLimit => r(Int3),
        UpperLimit => r(Int3),
        AreaOfEffect => Expr::Pattern(&AREA_OF_EFFECT),

        AClause => seq([
            lit("A)"),
            gap(),
            r(LocationIcao),
            many(seq([sp(), r(LocationIcao)])),
            opt(seq([sp(), r(Part)])),
        ]),
        LocationIcao => seq([Expr::Not(Box::new(lit("PART"))), r(IcaoId)]),
        Part => seq([lit("PART"), sp(), r(Int), sp(), lit("OF"), sp(), r(Int)]),

        BClause => seq([lit("B)"), gap(), r(DateTime)]),
        CClause => seq([lit("C)"), gap(), r(Expiry)]),
        Expiry => Expr::Choice(vec![
            seq([r(DateTime), opt(seq([gap(), r(Estimated)]))]),
            r(Permanent),
        ]),
        Estimated => lit("EST"),
        Permanent => lit("PERM"),

        DClause => seq([lit("D)"), gap(), r(TillNextClause)]),
        EClause => seq([lit("E)"), gap(), r(TillNextClause)]),
        FClause => seq([lit("F)"), gap(), r(TillNextClause)]),
        GClause => seq([lit("G)"), gap(), r(TillNextClause)]),

        Created => seq([
            lit("CREATED:"),
            gap(),
            r(Int2),
            sp(),
            r(Month),
            sp(),
            r(Year),
            sp(),
            r(Int2),
            lit(":"),
            r(Int2),
            lit(":"),
            r(Int2),
        ]),
        Source => seq([lit("SOURCE:"), gap(), r(TillNextClause)]),

        IcaoId => Expr::Pattern(&ICAO_ID),
        DateTime => seq([r(Int2), r(Int2), r(Int2), r(Int2), r(Int2)]),
        Int => Expr::Pattern(&INT),
        Int2 => Expr::Pattern(&INT2),
        Int3 => Expr::Pattern(&INT3),
        Month => Expr::Pattern(&MONTH),
        Year => Expr::Pattern(&YEAR),
        TillNextClause => Expr::Scan(till_next_clause),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Free Text
/////////////////////////////////////////////////////////////////////////////

/// Scans free text starting at `start` and returns where it ends.
///
/// The text ends before the first whitespace that is followed by the start
/// of another clause, i.e. a single capital letter and `)` or one of the
/// `CREATED:` and `SOURCE:` markers. Without such a clause, the text runs
/// until the end of the enclosing group, which is the end of the input
/// without trailing whitespace and a closing parenthesis. The text may thus
/// contain parentheses and line breaks.
pub(crate) fn till_next_clause(input: &str, start: usize) -> Option<usize> {
    let trimmed = input.trim_end();
    let group_end = trimmed.strip_suffix(')').unwrap_or(trimmed).len();

    if start > group_end {
        return None;
    }

    let bytes = input.as_bytes();
    let mut end = (start..group_end)
        .find(|&i| bytes[i].is_ascii_whitespace() && starts_clause(&input[i + 1..]))
        .unwrap_or(group_end);

    // e.g. the `\r` of a CRLF line break
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    Some(end)
}

fn starts_clause(s: &str) -> bool {
    match s.as_bytes() {
        [letter, b')', ..] if letter.is_ascii_uppercase() => true,
        _ => s.starts_with("CREATED:") || s.starts_with("SOURCE:"),
    }
}
