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

//! Reduction of a parse tree into a [`Notam`].
//!
//! The tree is reduced bottom up: each node is reduced to a [`Value`] from
//! the values of its children, and the NOTAM is assembled at the root. Rules
//! without their own meaning pass the values of their children on.

use std::collections::BTreeSet;
use std::ops::Range;

use chrono::{DateTime, TimeZone, Utc};
use log::trace;

use crate::codes::{decode_codes, Purpose, Scope, TrafficType};
use crate::error::Error;
use crate::grammar::{Rule, AREA_OF_EFFECT};
use crate::record::{Area, Notam, NotamType, Part, ValidTill};
use crate::tree::Node;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Reduces the tree of the root rule into a NOTAM.
pub(crate) fn notam(root: &Node, input: &str) -> Result<Notam, Error> {
    match reduce(root, input)? {
        Value::Notam(notam) => Ok(*notam),
        _ => Err(Error::UnexpectedStructure { rule: root.rule }),
    }
}

/// The value a node is reduced to.
#[derive(Debug)]
enum Value<'i> {
    Text(&'i str),
    Number(u32),
    Instant(DateTime<Utc>),
    TrafficType(BTreeSet<TrafficType>),
    Purpose(BTreeSet<Purpose>),
    Scope(BTreeSet<Scope>),
    Area(Area),
    Part(Part),
    Estimated,
    Permanent,
    Header(Header<'i>),
    QClause(QClause<'i>),
    AClause(AClause),
    BClause(DateTime<Utc>, Range<usize>),
    CClause(ValidTill, Range<usize>),
    /// Free text of the items D to G.
    FreeText(Rule, &'i str, Range<usize>),
    Created(DateTime<Utc>),
    Source(&'i str),
    /// Values of a rule without its own meaning.
    Children(Vec<Value<'i>>),
    Notam(Box<Notam>),
}

#[derive(Debug)]
struct Header<'i> {
    notam_id: &'i str,
    notam_type: NotamType,
    ref_notam_id: Option<&'i str>,
}

#[derive(Debug)]
struct QClause<'i> {
    fir: &'i str,
    notam_code: &'i str,
    traffic_type: BTreeSet<TrafficType>,
    purpose: BTreeSet<Purpose>,
    scope: BTreeSet<Scope>,
    fl_lower: u16,
    fl_upper: u16,
    area: Area,
}

#[derive(Debug)]
struct AClause {
    location: Vec<String>,
    part: Option<Part>,
    span: Range<usize>,
}

fn reduce<'i>(node: &Node, input: &'i str) -> Result<Value<'i>, Error> {
    let children = node
        .children
        .iter()
        .map(|child| reduce(child, input))
        .collect::<Result<Vec<_>, _>>()?;

    let rule = node.rule;
    let text = node.text(input);
    let unexpected = || Error::UnexpectedStructure { rule };
    let mut values = Values::new(rule, children);

    let value = match rule {
        Rule::Root => Value::Notam(Box::new(assemble(values.flatten(), input, rule)?)),

        Rule::NotamnHeader => header(&mut values, NotamType::New)?,
        Rule::NotamrHeader => header(&mut values, NotamType::Replace)?,
        Rule::NotamcHeader => header(&mut values, NotamType::Cancel)?,

        Rule::QClause => Value::QClause(QClause {
            fir: values.text()?,
            notam_code: values.text()?,
            traffic_type: values.next(|v| match v {
                Value::TrafficType(codes) => Some(codes),
                _ => None,
            })?,
            purpose: values.next(|v| match v {
                Value::Purpose(codes) => Some(codes),
                _ => None,
            })?,
            scope: values.next(|v| match v {
                Value::Scope(codes) => Some(codes),
                _ => None,
            })?,
            fl_lower: flight_level(values.number()?, rule)?,
            fl_upper: flight_level(values.number()?, rule)?,
            area: values.next(|v| match v {
                Value::Area(area) => Some(area),
                _ => None,
            })?,
        }),
        Rule::Fir | Rule::LowerLimit | Rule::UpperLimit => values.single()?,
        Rule::TrafficType => Value::TrafficType(decode_codes(text, TrafficType::CODES)),
        Rule::Purpose => Value::Purpose(decode_codes(text, Purpose::CODES)),
        Rule::Scope => Value::Scope(decode_codes(text, Scope::CODES)),
        Rule::AreaOfEffect => Value::Area(area(text).ok_or_else(unexpected)?),

        Rule::AClause => {
            let location = node
                .descendants(Rule::IcaoId)
                .into_iter()
                .map(|n| n.text(input).to_string())
                .collect();
            let start = node
                .child(Rule::LocationIcao)
                .map(|n| n.span.start)
                .ok_or_else(unexpected)?;
            let part = values.flatten().into_iter().find_map(|v| match v {
                Value::Part(part) => Some(part),
                _ => None,
            });

            Value::AClause(AClause {
                location,
                part,
                span: start..node.span.end,
            })
        }
        Rule::Part => Value::Part(Part {
            n: small(values.number()?, rule)?,
            of: small(values.number()?, rule)?,
        }),

        Rule::BClause => Value::BClause(values.instant()?, content(node)?),
        Rule::CClause => {
            let valid_till = values.next(|v| match v {
                Value::CClause(valid_till, _) => Some(valid_till),
                _ => None,
            })?;
            Value::CClause(valid_till, content(node)?)
        }
        Rule::Expiry => {
            let values = values.flatten();
            if values.iter().any(|v| matches!(v, Value::Permanent)) {
                Value::CClause(ValidTill::permanent(), node.span.clone())
            } else {
                let instant = values
                    .iter()
                    .find_map(|v| match v {
                        Value::Instant(instant) => Some(*instant),
                        _ => None,
                    })
                    .ok_or_else(unexpected)?;

                if values.iter().any(|v| matches!(v, Value::Estimated)) {
                    Value::CClause(ValidTill::estimated(instant), node.span.clone())
                } else {
                    Value::CClause(ValidTill::new(instant), node.span.clone())
                }
            }
        }
        Rule::Estimated => Value::Estimated,
        Rule::Permanent => Value::Permanent,

        Rule::DClause | Rule::EClause | Rule::FClause | Rule::GClause => {
            Value::FreeText(rule, values.text()?, content(node)?)
        }

        Rule::Created => {
            let day = values.number()?;
            let month = values.number()?;
            let year = values.number()?;
            let hour = values.number()?;
            let min = values.number()?;
            let sec = values.number()?;
            Value::Created(instant(year as i32, month, day, hour, min, sec, node)?)
        }
        Rule::Source => Value::Source(values.text()?),

        Rule::DateTime => {
            let year = two_digit_year(values.number()?);
            let month = values.number()?;
            let day = values.number()?;
            let hour = values.number()?;
            let min = values.number()?;
            Value::Instant(instant(year, month, day, hour, min, 0, node)?)
        }
        Rule::Month => Value::Number(month(text).ok_or(Error::InvalidDateTime {
            position: node.span.start,
        })?),
        Rule::Int | Rule::Int2 | Rule::Int3 | Rule::Year => {
            Value::Number(text.parse().map_err(|_| unexpected())?)
        }
        Rule::NotamId | Rule::NotamCode | Rule::IcaoId | Rule::TillNextClause => Value::Text(text),

        Rule::Header | Rule::LocationIcao => Value::Children(values.flatten()),
    };

    trace!("reduced {rule} to {value:?}");
    Ok(value)
}

fn header<'i>(values: &mut Values<'i>, notam_type: NotamType) -> Result<Value<'i>, Error> {
    let notam_id = values.text()?;
    let ref_notam_id = match notam_type {
        NotamType::New => None,
        NotamType::Replace | NotamType::Cancel => Some(values.text()?),
    };

    Ok(Value::Header(Header {
        notam_id,
        notam_type,
        ref_notam_id,
    }))
}

/// Assembles the NOTAM from the values of the root's children.
fn assemble(values: Vec<Value<'_>>, input: &str, rule: Rule) -> Result<Notam, Error> {
    let unexpected = || Error::UnexpectedStructure { rule };

    let mut header = None;
    let mut q = None;
    let mut a = None;
    let mut b = None;
    let mut c = None;
    let mut d = None;
    let mut e = None;
    let mut f = None;
    let mut g = None;
    let mut created = None;
    let mut source = None;

    for value in values {
        match value {
            Value::Header(v) => header = Some(v),
            Value::QClause(v) => q = Some(v),
            Value::AClause(v) => a = Some(v),
            Value::BClause(instant, span) => b = Some((instant, span)),
            Value::CClause(valid_till, span) => c = Some((valid_till, span)),
            Value::FreeText(Rule::DClause, text, span) => d = Some((text, span)),
            Value::FreeText(Rule::EClause, text, span) => e = Some((text, span)),
            Value::FreeText(Rule::FClause, text, span) => f = Some((text, span)),
            Value::FreeText(Rule::GClause, text, span) => g = Some((text, span)),
            Value::Created(instant) => created = Some(instant),
            Value::Source(text) => source = Some(text),
            _ => return Err(unexpected()),
        }
    }

    let header = header.ok_or_else(unexpected)?;
    let q = q.ok_or_else(unexpected)?;
    let a = a.ok_or_else(unexpected)?;
    let (valid_from, indices_item_b) = b.ok_or_else(unexpected)?;
    let (body, indices_item_e) = e.ok_or_else(unexpected)?;
    let (valid_till, indices_item_c) = c.unzip();
    let (schedule, indices_item_d) = d.unzip();
    let (limit_lower, indices_item_f) = f.unzip();
    let (limit_upper, indices_item_g) = g.unzip();

    Ok(Notam {
        full_text: input.to_string(),
        notam_id: header.notam_id.to_string(),
        notam_type: header.notam_type,
        ref_notam_id: header.ref_notam_id.map(str::to_string),
        fir: q.fir.to_string(),
        notam_code: q.notam_code.to_string(),
        traffic_type: q.traffic_type,
        purpose: q.purpose,
        scope: q.scope,
        fl_lower: q.fl_lower,
        fl_upper: q.fl_upper,
        area: q.area,
        location: a.location,
        part: a.part,
        valid_from,
        valid_till,
        schedule: schedule.map(str::to_string),
        body: body.to_string(),
        limit_lower: limit_lower.map(str::to_string),
        limit_upper: limit_upper.map(str::to_string),
        source: source.map(str::to_string),
        created,
        indices_item_a: a.span,
        indices_item_b,
        indices_item_c,
        indices_item_d,
        indices_item_e,
        indices_item_f,
        indices_item_g,
    })
}

/// Returns the span of a clause's content, which is the clause's last node.
fn content(node: &Node) -> Result<Range<usize>, Error> {
    node.children
        .last()
        .map(|child| child.span.clone())
        .ok_or(Error::UnexpectedStructure { rule: node.rule })
}

fn area(text: &str) -> Option<Area> {
    let caps = AREA_OF_EFFECT.captures(text)?;
    Some(Area {
        lat: caps["lat"].to_string(),
        long: caps["long"].to_string(),
        radius: caps["radius"].parse().ok()?,
    })
}

/// Interprets a two digit year; the years 81 to 99 are in the 20th century,
/// all others in the 21st.
pub(crate) fn two_digit_year(yy: u32) -> i32 {
    if yy > 80 {
        1900 + yy as i32
    } else {
        2000 + yy as i32
    }
}

/// Returns the month number of a three letter month name, e.g. `Aug`.
pub(crate) fn month(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

fn instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    node: &Node,
) -> Result<DateTime<Utc>, Error> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .ok_or(Error::InvalidDateTime {
            position: node.span.start,
        })
}

fn flight_level(n: u32, rule: Rule) -> Result<u16, Error> {
    u16::try_from(n).map_err(|_| Error::UnexpectedStructure { rule })
}

fn small(n: u32, rule: Rule) -> Result<u8, Error> {
    u8::try_from(n).map_err(|_| Error::UnexpectedStructure { rule })
}

/// Cursor over the reduced values of a node's children.
struct Values<'i> {
    rule: Rule,
    values: std::vec::IntoIter<Value<'i>>,
}

impl<'i> Values<'i> {
    fn new(rule: Rule, values: Vec<Value<'i>>) -> Self {
        Self {
            rule,
            values: values.into_iter(),
        }
    }

    /// Takes the next value and converts it by `f`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no next value or `f` rejects it.
    fn next<T>(&mut self, f: impl FnOnce(Value<'i>) -> Option<T>) -> Result<T, Error> {
        self.values
            .next()
            .and_then(f)
            .ok_or(Error::UnexpectedStructure { rule: self.rule })
    }

    fn text(&mut self) -> Result<&'i str, Error> {
        self.next(|v| match v {
            Value::Text(text) => Some(text),
            _ => None,
        })
    }

    fn number(&mut self) -> Result<u32, Error> {
        self.next(|v| match v {
            Value::Number(n) => Some(n),
            _ => None,
        })
    }

    fn instant(&mut self) -> Result<DateTime<Utc>, Error> {
        self.next(|v| match v {
            Value::Instant(instant) => Some(instant),
            _ => None,
        })
    }

    /// Takes the only value.
    fn single(&mut self) -> Result<Value<'i>, Error> {
        match (self.values.next(), self.values.next()) {
            (Some(value), None) => Ok(value),
            _ => Err(Error::UnexpectedStructure { rule: self.rule }),
        }
    }

    /// Takes the remaining values with nested children spliced in.
    fn flatten(&mut self) -> Vec<Value<'i>> {
        fn splice<'i>(value: Value<'i>, out: &mut Vec<Value<'i>>) {
            match value {
                Value::Children(values) => values.into_iter().for_each(|v| splice(v, out)),
                value => out.push(value),
            }
        }

        let mut out = Vec::new();
        for value in self.values.by_ref() {
            splice(value, &mut out);
        }
        out
    }
}
