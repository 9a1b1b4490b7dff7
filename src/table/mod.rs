//! Word-keyed transition tables.
//!
//! A table maps `(state, word)` to a target state plus an ordered list of
//! stack operations. The mapping is total by absence: a missing key means the
//! automaton stays where it is and does nothing.
//!
//! Tables are immutable once built. Construct them with
//! [`TransitionTableBuilder`], which rejects malformed tables up front, or
//! decode a [`TableDocument`].

pub mod builder;
pub mod error;
pub mod format;

pub use builder::TransitionTableBuilder;
pub use error::{BuildError, TableViolation};
pub use format::{FormatError, TableDocument, TABLE_FORMAT_VERSION};

use crate::core::{StackOperation, StackSymbol, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single `(from, word) -> (to, operations)` rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub from: S,
    pub word: String,
    pub to: S,
    #[serde(default)]
    pub operations: Vec<StackOperation>,
}

/// Immutable transition table with its initial state and stack alphabet.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    pub(crate) initial: S,
    pub(crate) alphabet: Vec<StackSymbol>,
    pub(crate) transitions: Vec<Transition<S>>,
    pub(crate) index: HashMap<S, HashMap<String, usize>>,
}

impl<S: State> TransitionTable<S> {
    /// Look up the rule for `(state, word)` (pure).
    ///
    /// `None` is the expected outcome for any word the table does not know.
    pub fn lookup(&self, state: &S, word: &str) -> Option<&Transition<S>> {
        let position = *self.index.get(state)?.get(word)?;
        self.transitions.get(position)
    }

    /// The state every run starts from unless told otherwise.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn alphabet(&self) -> &[StackSymbol] {
        &self.alphabet
    }

    /// All rules in declaration order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Words that fire a transition out of `state`, in declaration order.
    pub fn words_from(&self, state: &S) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.from == *state)
            .map(|t| t.word.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Light {
            Off,
            Dim,
            Bright,
        }
        final: [Bright]
    }

    fn table() -> TransitionTable<Light> {
        TransitionTableBuilder::new()
            .initial(Light::Off)
            .alphabet("x".chars())
            .transition(Light::Off, "up", Light::Dim, [StackOperation::push('x')])
            .transition(Light::Dim, "up", Light::Bright, [])
            .transition(Light::Dim, "down", Light::Off, [])
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_declared_rule() {
        let table = table();
        let rule = table.lookup(&Light::Off, "up").unwrap();

        assert_eq!(rule.to, Light::Dim);
        assert_eq!(rule.operations, vec![StackOperation::push('x')]);
    }

    #[test]
    fn lookup_is_keyed_on_state_and_word() {
        let table = table();

        assert_eq!(table.lookup(&Light::Dim, "up").unwrap().to, Light::Bright);
        assert!(table.lookup(&Light::Off, "down").is_none());
        assert!(table.lookup(&Light::Bright, "up").is_none());
    }

    #[test]
    fn lookup_matches_words_exactly() {
        let table = table();

        assert!(table.lookup(&Light::Off, "Up").is_none());
        assert!(table.lookup(&Light::Off, "up ").is_none());
        assert!(table.lookup(&Light::Off, "").is_none());
    }

    #[test]
    fn accessors_expose_table_shape() {
        let table = table();

        assert_eq!(table.initial(), &Light::Off);
        assert_eq!(table.alphabet(), &[StackSymbol('x')]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.words_from(&Light::Dim), vec!["up", "down"]);
        assert!(table.words_from(&Light::Bright).is_empty());
    }
}
