//! Builder for constructing transition tables.
//!
//! Validation collects every violation in one pass instead of stopping at
//! the first, so a malformed table reports all of its problems at once.

use crate::core::{StackOpKind, StackOperation, StackSymbol, State};
use crate::table::error::{BuildError, TableViolation};
use crate::table::{Transition, TransitionTable};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Builder for constructing transition tables with a fluent API.
pub struct TransitionTableBuilder<S: State> {
    initial: Option<S>,
    alphabet: Vec<StackSymbol>,
    transitions: Vec<Transition<S>>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            alphabet: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the stack symbol alphabet. Slot order follows iteration order.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet = symbols.into_iter().map(StackSymbol).collect();
        self
    }

    /// Add a `(from, word) -> (to, operations)` rule.
    pub fn transition<I>(mut self, from: S, word: impl Into<String>, to: S, operations: I) -> Self
    where
        I: IntoIterator<Item = StackOperation>,
    {
        self.transitions.push(Transition {
            from,
            word: word.into(),
            to,
            operations: operations.into_iter().collect(),
        });
        self
    }

    /// Add several pre-built rules.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the table.
    ///
    /// Fails fast on a missing initial state or an empty rule set, then
    /// reports every malformed rule together.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        match validate(&self.alphabet, &self.transitions) {
            Validation::Success(_) => {}
            Validation::Failure(errors) => {
                return Err(BuildError::Malformed {
                    violations: errors.iter().cloned().collect(),
                });
            }
        }

        let mut index: HashMap<S, HashMap<String, usize>> = HashMap::new();
        for (position, transition) in self.transitions.iter().enumerate() {
            index
                .entry(transition.from.clone())
                .or_default()
                .insert(transition.word.clone(), position);
        }

        Ok(TransitionTable {
            initial,
            alphabet: self.alphabet,
            transitions: self.transitions,
            index,
        })
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate<S: State>(alphabet: &[StackSymbol], transitions: &[Transition<S>]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen: HashSet<(&S, &str)> = HashSet::new();

    for transition in transitions {
        if !seen.insert((&transition.from, transition.word.as_str())) {
            checks.push(Validation::fail(TableViolation::DuplicateTransition {
                from: transition.from.name().to_string(),
                word: transition.word.clone(),
            }));
        }
        checks.extend(check_operations(alphabet, transition));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Every symbol must be in the alphabet and every pop must follow a push of
/// the same symbol earlier in the same list, so a run from empty stacks can
/// never underflow.
fn check_operations<S: State>(alphabet: &[StackSymbol], transition: &Transition<S>) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut pending: HashMap<StackSymbol, usize> = HashMap::new();

    for op in &transition.operations {
        if !alphabet.contains(&op.symbol) {
            checks.push(Validation::fail(TableViolation::UnknownSymbol {
                from: transition.from.name().to_string(),
                word: transition.word.clone(),
                symbol: op.symbol,
            }));
            continue;
        }

        let depth = pending.entry(op.symbol).or_insert(0);
        match op.kind {
            StackOpKind::Push => *depth += 1,
            StackOpKind::Pop if *depth > 0 => *depth -= 1,
            StackOpKind::Pop => {
                checks.push(Validation::fail(TableViolation::UnmatchedPop {
                    from: transition.from.name().to_string(),
                    word: transition.word.clone(),
                    symbol: op.symbol,
                }));
            }
        }
    }

    checks
}
