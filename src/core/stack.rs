//! Auxiliary pushdown stacks.
//!
//! A table declares an alphabet of stack symbols and every symbol owns one
//! independent stack. Transitions push the consumed word onto, or pop the
//! latest word from, the stack of a named symbol. Stack contents are kept for
//! diagnostics only; no acceptance decision reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque symbol naming one stack slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackSymbol(pub char);

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an operation adds to or removes from a stack.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOpKind {
    Push,
    Pop,
}

/// One stack operation attached to a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StackOperation {
    pub kind: StackOpKind,
    pub symbol: StackSymbol,
}

impl StackOperation {
    pub fn push(symbol: char) -> Self {
        Self {
            kind: StackOpKind::Push,
            symbol: StackSymbol(symbol),
        }
    }

    pub fn pop(symbol: char) -> Self {
        Self {
            kind: StackOpKind::Pop,
            symbol: StackSymbol(symbol),
        }
    }
}

/// Errors raised while mutating stacks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StackError {
    #[error("Stack symbol '{0}' is not part of the alphabet")]
    UnknownSymbol(StackSymbol),

    #[error("Pop on empty stack '{0}'")]
    Underflow(StackSymbol),
}

/// One stack per alphabet slot, owned by a single run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stacks {
    alphabet: Vec<StackSymbol>,
    slots: Vec<Vec<String>>,
}

impl Stacks {
    /// Allocate empty stacks for every symbol in the alphabet.
    pub fn new(alphabet: &[StackSymbol]) -> Self {
        Self {
            alphabet: alphabet.to_vec(),
            slots: vec![Vec::new(); alphabet.len()],
        }
    }

    fn slot(&self, symbol: StackSymbol) -> Result<usize, StackError> {
        self.alphabet
            .iter()
            .position(|s| *s == symbol)
            .ok_or(StackError::UnknownSymbol(symbol))
    }

    /// Apply an operation, pushing `word` when the operation is a push.
    pub fn apply(&mut self, op: &StackOperation, word: &str) -> Result<(), StackError> {
        let index = self.slot(op.symbol)?;
        match op.kind {
            StackOpKind::Push => {
                self.slots[index].push(word.to_string());
            }
            StackOpKind::Pop => {
                self.slots[index]
                    .pop()
                    .ok_or(StackError::Underflow(op.symbol))?;
            }
        }
        Ok(())
    }

    /// Contents of one symbol's stack, bottom first.
    pub fn get(&self, symbol: StackSymbol) -> Option<&[String]> {
        self.slot(symbol).ok().map(|i| self.slots[i].as_slice())
    }

    /// Check whether every stack is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Total number of entries across all stacks.
    pub fn depth(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Vec<StackSymbol> {
        "pne".chars().map(StackSymbol).collect()
    }

    #[test]
    fn new_stacks_are_empty() {
        let stacks = Stacks::new(&alphabet());
        assert!(stacks.is_empty());
        assert_eq!(stacks.depth(), 0);
        assert_eq!(stacks.get(StackSymbol('p')), Some(&[][..]));
    }

    #[test]
    fn push_appends_word_to_symbol_slot() {
        let mut stacks = Stacks::new(&alphabet());
        stacks.apply(&StackOperation::push('e'), "happy").unwrap();
        stacks.apply(&StackOperation::push('e'), "excited").unwrap();

        assert_eq!(
            stacks.get(StackSymbol('e')).unwrap(),
            &["happy".to_string(), "excited".to_string()]
        );
        assert!(stacks.get(StackSymbol('p')).unwrap().is_empty());
        assert_eq!(stacks.depth(), 2);
    }

    #[test]
    fn pop_removes_latest_entry() {
        let mut stacks = Stacks::new(&alphabet());
        stacks.apply(&StackOperation::push('n'), "sad").unwrap();
        stacks.apply(&StackOperation::push('n'), "hate").unwrap();
        stacks.apply(&StackOperation::pop('n'), "neutral").unwrap();

        assert_eq!(stacks.get(StackSymbol('n')).unwrap(), &["sad".to_string()]);
    }

    #[test]
    fn pop_on_empty_stack_underflows() {
        let mut stacks = Stacks::new(&alphabet());
        let result = stacks.apply(&StackOperation::pop('p'), "neutral");
        assert_eq!(result, Err(StackError::Underflow(StackSymbol('p'))));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let mut stacks = Stacks::new(&alphabet());
        let result = stacks.apply(&StackOperation::push('z'), "word");
        assert_eq!(result, Err(StackError::UnknownSymbol(StackSymbol('z'))));
        assert!(stacks.get(StackSymbol('z')).is_none());
    }

    #[test]
    fn operation_serializes_with_lowercase_kind() {
        let json = serde_json::to_string(&StackOperation::push('p')).unwrap();
        assert_eq!(json, r#"{"kind":"push","symbol":"p"}"#);
    }
}
