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

//! Parse tree builder.
//!
//! Executes the parsing expressions of a [grammar](crate::grammar) against an
//! input and builds a tree of [`Node`]s. Only named rules produce nodes;
//! literals, whitespace and the structure of sequences and repetitions are
//! folded into the node of the enclosing rule.

use std::ops::Range;

use log::trace;

use crate::error::Error;
use crate::grammar::{Expr, Grammar, Rule};

/// A node of the parse tree.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    /// The rule that matched.
    pub rule: Rule,
    /// Byte range of the input matched by the rule.
    pub span: Range<usize>,
    /// Nodes of the rules referenced while matching, in input order.
    pub children: Vec<Node>,
}

impl Node {
    /// Returns the text matched by this node.
    #[inline]
    pub fn text<'i>(&self, input: &'i str) -> &'i str {
        &input[self.span.clone()]
    }

    /// Returns the first child matched by `rule`.
    pub fn child(&self, rule: Rule) -> Option<&Node> {
        self.children.iter().find(|child| child.rule == rule)
    }

    /// Returns `true` if this node or any node beneath was matched by `rule`.
    pub fn has_descendant(&self, rule: Rule) -> bool {
        self.rule == rule || self.children.iter().any(|child| child.has_descendant(rule))
    }

    /// Returns all nodes beneath this node matched by `rule`, depth first
    /// from left to right.
    pub fn descendants(&self, rule: Rule) -> Vec<&Node> {
        let mut nodes = Vec::new();
        self.collect(rule, &mut nodes);
        nodes
    }

    fn collect<'a>(&'a self, rule: Rule, nodes: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.rule == rule {
                nodes.push(child);
            } else {
                child.collect(rule, nodes);
            }
        }
    }
}

/// Builds the parse tree of `input` matched by `rule`.
pub(crate) fn build(grammar: &Grammar, rule: Rule, input: &str) -> Result<Node, Error> {
    let mut parser = Parser {
        grammar,
        input,
        failure: None,
    };

    match parser.rule(rule, 0) {
        Some(node) if node.span.end == input.len() => Ok(node),
        Some(node) => Err(match parser.failure {
            Some((position, rule)) if position > node.span.end => Error::Syntax { rule, position },
            _ => Error::TrailingInput {
                position: node.span.end,
            },
        }),
        None => {
            let (position, rule) = parser.failure.unwrap_or((0, rule));
            Err(Error::Syntax { rule, position })
        }
    }
}

struct Parser<'g, 'i> {
    grammar: &'g Grammar,
    input: &'i str,
    /// The furthest position at which an expression failed, and the rule
    /// that was being matched.
    failure: Option<(usize, Rule)>,
}

impl<'g, 'i> Parser<'g, 'i> {
    fn rule(&mut self, rule: Rule, pos: usize) -> Option<Node> {
        let grammar = self.grammar;
        let mut children = Vec::new();
        let end = self.eval(grammar.definition(rule), rule, pos, &mut children)?;

        trace!("{rule} matched {pos}..{end}");

        Some(Node {
            rule,
            span: pos..end,
            children,
        })
    }

    /// Evaluates the expression at `pos` and returns the end of the match.
    ///
    /// Nodes of matched rules are pushed to `nodes`. If the expression fails,
    /// `nodes` is left as it was.
    fn eval(
        &mut self,
        expr: &'g Expr,
        rule: Rule,
        pos: usize,
        nodes: &mut Vec<Node>,
    ) -> Option<usize> {
        match expr {
            Expr::Literal(s) => {
                if self.input[pos..].starts_with(s) {
                    Some(pos + s.len())
                } else {
                    self.fail(rule, pos)
                }
            }

            Expr::Pattern(re) => match re.find(&self.input[pos..]) {
                Some(m) => Some(pos + m.end()),
                None => self.fail(rule, pos),
            },

            Expr::Scan(scan) => match scan(self.input, pos) {
                Some(end) => Some(end),
                None => self.fail(rule, pos),
            },

            Expr::Ref(other) => {
                let node = self.rule(*other, pos)?;
                let end = node.span.end;
                nodes.push(node);
                Some(end)
            }

            Expr::Seq(items) => {
                let mark = nodes.len();
                let mut end = pos;

                for item in items {
                    match self.eval(item, rule, end, nodes) {
                        Some(next) => end = next,
                        None => {
                            nodes.truncate(mark);
                            return None;
                        }
                    }
                }

                Some(end)
            }

            Expr::Choice(alternatives) => alternatives
                .iter()
                .find_map(|alternative| self.eval(alternative, rule, pos, nodes)),

            Expr::Optional(inner) => Some(self.eval(inner, rule, pos, nodes).unwrap_or(pos)),

            Expr::ZeroOrMore(inner) => {
                let mut end = pos;
                while let Some(next) = self.eval(inner, rule, end, nodes) {
                    // an empty match would repeat forever
                    if next == end {
                        break;
                    }
                    end = next;
                }
                Some(end)
            }

            Expr::Not(inner) => {
                let mark = nodes.len();
                let matched = self.eval(inner, rule, pos, nodes).is_some();
                nodes.truncate(mark);

                if matched {
                    self.fail(rule, pos)
                } else {
                    Some(pos)
                }
            }
        }
    }

    fn fail(&mut self, rule: Rule, pos: usize) -> Option<usize> {
        match self.failure {
            Some((furthest, _)) if furthest > pos => {}
            _ => self.failure = Some((pos, rule)),
        }
        None
    }
}
