//! Named lexer states and their ordered rules

use std::collections::HashMap;

use super::Tokens;
use super::rule::{Rule, RuleSpec, Step, Transition};
use crate::error::LexError;

/// Name of the state every tokenization starts in
pub const ROOT: &str = "root";

/// A named, ordered list of rules
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    rules: Vec<Rule>,
}

impl State {
    /// State name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in precedence order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// An immutable set of lexer states
///
/// Built once through [`RuleTable::builder`]; every pattern is compiled and
/// every transition resolved at build time, so tokenizing never has to look
/// anything up by name.
#[derive(Debug, Clone)]
pub struct RuleTable {
    states: Vec<State>,
    root: usize,
}

impl RuleTable {
    /// Start declaring a table
    #[must_use]
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Tokenize `input`, starting in the root state
    #[must_use]
    pub fn tokenize<'a>(&'a self, input: &'a str) -> Tokens<'a> {
        Tokens::new(self, input)
    }

    /// All states, in declaration order
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look up a state by name
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    pub(crate) const fn root(&self) -> usize {
        self.root
    }

    pub(crate) fn rules_at(&self, index: usize) -> &[Rule] {
        &self.states[index].rules
    }

    pub(crate) fn name_at(&self, index: usize) -> &str {
        &self.states[index].name
    }
}

/// Collects state declarations for a [`RuleTable`]
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    states: Vec<(String, Vec<RuleSpec>)>,
}

impl RuleTableBuilder {
    /// Declare a state with its rules in precedence order
    #[must_use]
    pub fn state(mut self, name: &str, rules: Vec<RuleSpec>) -> Self {
        self.states.push((name.to_string(), rules));
        self
    }

    /// Compile every rule and resolve transitions
    pub fn build(self) -> Result<RuleTable, LexError> {
        let mut index = HashMap::with_capacity(self.states.len());
        for (i, (name, _)) in self.states.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(LexError::DuplicateState(name.clone()));
            }
        }
        let root = *index.get(ROOT).ok_or(LexError::MissingRoot)?;

        let mut states = Vec::with_capacity(self.states.len());
        for (name, specs) in self.states {
            let mut rules = Vec::with_capacity(specs.len());
            for spec in specs {
                let mut rule = spec.compile(&name)?;
                rule.step = resolve(&name, rule.transition(), &index)?;
                rules.push(rule);
            }
            states.push(State { name, rules });
        }

        Ok(RuleTable { states, root })
    }
}

fn resolve(
    state: &str,
    transition: &Transition,
    index: &HashMap<String, usize>,
) -> Result<Step, LexError> {
    let lookup = |target: &String| {
        index.get(target).copied().ok_or_else(|| LexError::UnknownState {
            state: state.to_string(),
            target: target.clone(),
        })
    };

    for target in transition.targets() {
        lookup(target)?;
    }

    Ok(match transition {
        Transition::Stay => Step::Stay,
        Transition::Pop => Step::Pop,
        Transition::Push(target) => Step::Push(lookup(target)?),
        Transition::PushSequence(targets) => {
            Step::PushSequence(targets.iter().map(lookup).collect::<Result<_, _>>()?)
        },
    })
}
