//! Lexer rules: a pattern, what it emits and where it moves the state stack

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use regex_syntax::hir::{Hir, HirKind};

use super::TokenKind;
use crate::error::LexError;

/// What a matching rule emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One token over the whole match
    Token(TokenKind),
    /// One token per capture group, in group order
    Groups(Vec<TokenKind>),
}

/// How a matching rule changes the state stack
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Transition {
    /// Leave the stack alone
    #[default]
    Stay,
    /// Push a state
    Push(String),
    /// Pop the top state (never below the root)
    Pop,
    /// Push several states, first to last
    PushSequence(Vec<String>),
}

impl Transition {
    /// Push the named state
    #[must_use]
    pub fn push(state: impl Into<String>) -> Self {
        Self::Push(state.into())
    }

    /// Push the named states in order
    #[must_use]
    pub fn sequence<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PushSequence(states.into_iter().map(Into::into).collect())
    }

    /// States this transition refers to
    pub(crate) fn targets(&self) -> &[String] {
        match self {
            Self::Stay | Self::Pop => &[],
            Self::Push(state) => std::slice::from_ref(state),
            Self::PushSequence(states) => states,
        }
    }
}

/// A rule as declared, before compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// The pattern source
    pub pattern: String,
    /// What to emit on a match
    pub action: Action,
    /// State change on a match
    pub transition: Transition,
}

impl RuleSpec {
    /// A rule emitting a single token
    #[must_use]
    pub fn token(pattern: &str, kind: TokenKind) -> Self {
        Self {
            pattern: pattern.to_string(),
            action: Action::Token(kind),
            transition: Transition::Stay,
        }
    }

    /// A rule emitting one token per capture group
    #[must_use]
    pub fn groups(pattern: &str, kinds: &[TokenKind]) -> Self {
        Self {
            pattern: pattern.to_string(),
            action: Action::Groups(kinds.to_vec()),
            transition: Transition::Stay,
        }
    }

    /// Set the transition
    #[must_use]
    pub fn then(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Push `state` on match
    #[must_use]
    pub fn push(self, state: &str) -> Self {
        self.then(Transition::push(state))
    }

    /// Pop on match
    #[must_use]
    pub fn pop(self) -> Self {
        self.then(Transition::Pop)
    }

    /// Compile the pattern and check group alignment
    pub(crate) fn compile(self, state: &str) -> Result<Rule, LexError> {
        let config = syntax::Config::new().multi_line(true);
        let regex = Regex::builder()
            .syntax(config)
            .build(&self.pattern)
            .map_err(|source| LexError::InvalidPattern {
                state: state.to_string(),
                pattern: self.pattern.clone(),
                source,
            })?;

        if let Action::Groups(kinds) = &self.action {
            // group 0 is the implicit whole-match group
            let groups = regex.captures_len().saturating_sub(1);
            if kinds.is_empty() || kinds.len() != groups {
                return Err(LexError::GroupMismatch {
                    state: state.to_string(),
                    pattern: self.pattern,
                    groups,
                    kinds: kinds.len(),
                });
            }

            // groups must follow one another for their spans to tile the match
            if let Ok(hir) = syntax::parse_with(&self.pattern, &config)
                && captures_overlap(&hir, false)
            {
                return Err(LexError::OverlappingGroups {
                    state: state.to_string(),
                    pattern: self.pattern,
                });
            }
        }

        Ok(Rule {
            pattern: self.pattern,
            regex,
            action: self.action,
            transition: self.transition,
            step: Step::Stay,
        })
    }
}

/// Whether a capture group sits inside another one, or under a repetition
/// that can match more than once
fn captures_overlap(hir: &Hir, enclosed: bool) -> bool {
    match hir.kind() {
        HirKind::Capture(capture) => enclosed || captures_overlap(&capture.sub, true),
        HirKind::Repetition(rep) => captures_overlap(&rep.sub, enclosed || rep.max != Some(1)),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => {
            subs.iter().any(|sub| captures_overlap(sub, enclosed))
        },
        HirKind::Empty | HirKind::Literal(_) | HirKind::Class(_) | HirKind::Look(_) => false,
    }
}

/// Transition with state names resolved to table indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Stay,
    Push(usize),
    Pop,
    PushSequence(Vec<usize>),
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    pub(crate) regex: Regex,
    action: Action,
    transition: Transition,
    pub(crate) step: Step,
}

impl Rule {
    /// The pattern source
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// What the rule emits
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// The declared transition
    #[must_use]
    pub const fn transition(&self) -> &Transition {
        &self.transition
    }
}
