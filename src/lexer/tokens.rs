//! The state-machine driver
//!
//! [`Tokens`] walks the input with a cursor and a state stack. At each
//! position the rules of the state on top of the stack are tried in order and
//! the first one matching at the cursor wins, whatever the length of later
//! matches. Text no rule accepts becomes a one-character
//! [`TokenKind::Error`] token, so the produced tokens always cover the input
//! exactly.

use std::collections::VecDeque;

use log::{debug, trace};
use regex_automata::{Anchored, Input};

use super::filter::Merged;
use super::rule::{Action, Rule, Step};
use super::{RuleTable, Span, Token, TokenKind};

/// Lazy token stream over one input
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    table: &'a RuleTable,
    input: &'a str,
    cursor: usize,
    stack: Vec<usize>,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(table: &'a RuleTable, input: &'a str) -> Self {
        Self {
            table,
            input,
            cursor: 0,
            stack: vec![table.root()],
            pending: VecDeque::new(),
        }
    }

    /// The text being tokenized
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next unconsumed character
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Names of the states on the stack, bottom first
    #[must_use]
    pub fn state_stack(&self) -> Vec<&'a str> {
        self.stack.iter().map(|&i| self.table.name_at(i)).collect()
    }

    /// Coalesce adjacent tokens of the same kind
    #[must_use]
    pub fn merged(self) -> Merged<'a, Self> {
        Merged::new(self.input, self)
    }

    fn top(&self) -> usize {
        self.stack.last().copied().unwrap_or_else(|| self.table.root())
    }

    /// Run one rule anchored at the cursor, queueing its tokens on success
    fn try_rule(&mut self, rule: &Rule) -> Option<usize> {
        let input = Input::new(self.input)
            .span(self.cursor..self.input.len())
            .anchored(Anchored::Yes);

        match rule.action() {
            Action::Token(kind) => {
                let m = rule.regex.search(&input)?;
                if m.is_empty() {
                    return None;
                }
                self.emit(*kind, Span::new(m.start(), m.end()));
                Some(m.end())
            },
            Action::Groups(kinds) => {
                let mut caps = rule.regex.create_captures();
                rule.regex.search_captures(&input, &mut caps);
                let m = caps.get_match()?;
                if m.is_empty() {
                    return None;
                }

                let mut last = m.start();
                let mut last_kind = kinds[0];
                for (i, kind) in kinds.iter().copied().enumerate() {
                    let Some(group) = caps.get_group(i + 1) else {
                        continue;
                    };
                    // groups are checked at build time; never step backwards
                    if group.is_empty() || group.start < last {
                        continue;
                    }
                    if group.start > last {
                        trace!("attaching gap {}..{} to group {}", last, group.start, i + 1);
                    }
                    self.emit(kind, Span::new(last, group.end));
                    last = group.end;
                    last_kind = kind;
                }
                if last < m.end() {
                    trace!("attaching tail {}..{} to last group", last, m.end());
                    self.emit(last_kind, Span::new(last, m.end()));
                }
                Some(m.end())
            },
        }
    }

    fn emit(&mut self, kind: TokenKind, span: Span) {
        trace!("{} {:?}", kind, &self.input[span.range()]);
        self.pending.push_back(Token::new(kind, span, self.input));
    }

    fn apply(&mut self, step: &Step) {
        match step {
            Step::Stay => {},
            Step::Push(state) => {
                debug!("push {}", self.table.name_at(*state));
                self.stack.push(*state);
            },
            Step::PushSequence(states) => {
                for &state in states {
                    debug!("push {}", self.table.name_at(state));
                    self.stack.push(state);
                }
            },
            Step::Pop => {
                if self.stack.len() > 1 {
                    if let Some(state) = self.stack.pop() {
                        debug!("pop {}", self.table.name_at(state));
                    }
                } else {
                    debug!("pop at root ignored at offset {}", self.cursor);
                }
            },
        }
    }

    fn advance(&mut self) {
        let table = self.table;
        let state = self.top();
        for rule in table.rules_at(state) {
            if let Some(end) = self.try_rule(rule) {
                self.cursor = end;
                self.apply(&rule.step);
                return;
            }
        }

        let width = self.input[self.cursor..].chars().next().map_or(1, char::len_utf8);
        let span = Span::new(self.cursor, self.cursor + width);
        debug!(
            "no rule in state {} matches {:?} at offset {}",
            table.name_at(state),
            &self.input[span.range()],
            self.cursor
        );
        self.pending.push_back(Token::new(TokenKind::Error, span, self.input));
        self.cursor = span.end;
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            if self.cursor >= self.input.len() {
                return None;
            }
            self.advance();
        }
        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
