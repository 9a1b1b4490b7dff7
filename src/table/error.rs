//! Build errors for transition tables.

use crate::core::StackSymbol;
use thiserror::Error;

/// A single problem found while validating a table's rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("Transition ({from}, '{word}') uses stack symbol '{symbol}' outside the alphabet")]
    UnknownSymbol {
        from: String,
        word: String,
        symbol: StackSymbol,
    },

    #[error("Transition ({from}, '{word}') pops '{symbol}' without a preceding push")]
    UnmatchedPop {
        from: String,
        word: String,
        symbol: StackSymbol,
    },

    #[error("Transition ({from}, '{word}') is declared more than once")]
    DuplicateTransition { from: String, word: String },
}

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition table is malformed {}", summary(.violations))]
    Malformed { violations: Vec<TableViolation> },
}

fn summary(violations: &[TableViolation]) -> String {
    let details = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("({} violation(s)): {}", violations.len(), details)
}
