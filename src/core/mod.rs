//! Core automaton types.
//!
//! This module contains the pure building blocks of the runner:
//! - State definitions via the `State` trait
//! - Auxiliary pushdown stacks and their operations
//! - Run history tracking
//!
//! Nothing here touches the transition table or the classifier.

mod history;
mod stack;
mod state;

pub use history::{RunHistory, StepRecord};
pub use stack::{StackError, StackOpKind, StackOperation, StackSymbol, Stacks};
pub use state::State;
