//! Interchange format for transition tables.
//!
//! A [`TableDocument`] is the serializable form of a table. It can be encoded
//! as JSON for hand editing or with bincode for compact storage. Decoding
//! always goes back through [`TransitionTableBuilder`], so a document can
//! never smuggle in a malformed table.

use crate::core::{StackSymbol, State};
use crate::table::error::BuildError;
use crate::table::{Transition, TransitionTable, TransitionTableBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version identifier for the table document format
pub const TABLE_FORMAT_VERSION: u32 = 1;

/// Errors that can occur while encoding or decoding table documents
#[derive(Debug, Error)]
pub enum FormatError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Document version is not supported by this version
    #[error("Unsupported table format version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Document decoded but describes an invalid table
    #[error("Invalid table: {0}")]
    Invalid(#[from] BuildError),
}

/// Serializable snapshot of a transition table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TableDocument<S: State> {
    /// Document format version
    pub version: u32,

    /// Initial state of the table
    pub initial: S,

    /// Stack symbol alphabet in slot order
    #[serde(default)]
    pub alphabet: Vec<StackSymbol>,

    /// Rules in declaration order
    pub transitions: Vec<Transition<S>>,
}

impl<S: State> TableDocument<S> {
    /// Validate and turn the document into a table.
    pub fn into_table(self) -> Result<TransitionTable<S>, FormatError> {
        if self.version != TABLE_FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion {
                found: self.version,
                supported: TABLE_FORMAT_VERSION,
            });
        }

        let table = TransitionTableBuilder::new()
            .initial(self.initial)
            .alphabet(self.alphabet.into_iter().map(|s| s.0))
            .transitions(self.transitions)
            .build()?;
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        bincode::serialize(self).map_err(|e| FormatError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        bincode::deserialize(bytes).map_err(|e| FormatError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State> TransitionTable<S> {
    /// Snapshot this table as a document.
    pub fn to_document(&self) -> TableDocument<S> {
        TableDocument {
            version: TABLE_FORMAT_VERSION,
            initial: self.initial.clone(),
            alphabet: self.alphabet.clone(),
            transitions: self.transitions.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        self.to_document().to_json()
    }

    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        TableDocument::from_json(json)?.into_table()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        self.to_document().to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        TableDocument::from_bytes(bytes)?.into_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StackOperation;
    use crate::emotion::{emotion_table, EmotionState};

    #[test]
    fn json_document_restores_lookups() {
        let json = emotion_table().to_json().unwrap();
        let restored: TransitionTable<EmotionState> = TransitionTable::from_json(&json).unwrap();

        assert_eq!(restored.len(), emotion_table().len());
        assert_eq!(
            restored.lookup(&EmotionState::Start, "dislike").unwrap().to,
            EmotionState::Negative
        );
        assert_eq!(restored.alphabet(), emotion_table().alphabet());
    }

    #[test]
    fn bincode_document_restores_lookups() {
        let bytes = emotion_table().to_bytes().unwrap();
        let restored: TransitionTable<EmotionState> = TransitionTable::from_bytes(&bytes).unwrap();

        assert_eq!(
            restored.lookup(&EmotionState::Excited, "excited").unwrap().to,
            EmotionState::Excited
        );
    }

    #[test]
    fn hand_written_json_is_accepted() {
        let json = r#"{
            "version": 1,
            "initial": "Start",
            "alphabet": ["p"],
            "transitions": [
                {"from": "Start", "word": "glad", "to": "Positive",
                 "operations": [{"kind": "push", "symbol": "p"}]},
                {"from": "Start", "word": "meh", "to": "Neutral"}
            ]
        }"#;

        let table: TransitionTable<EmotionState> = TransitionTable::from_json(json).unwrap();

        let glad = table.lookup(&EmotionState::Start, "glad").unwrap();
        assert_eq!(glad.operations, vec![StackOperation::push('p')]);
        assert!(table.lookup(&EmotionState::Start, "meh").unwrap().operations.is_empty());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut document = emotion_table().to_document();
        document.version = 99;

        let result = document.into_table();
        assert!(matches!(
            result,
            Err(FormatError::UnsupportedVersion { found: 99, supported: 1 })
        ));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let json = r#"{
            "version": 1,
            "initial": "Start",
            "alphabet": ["p", "e"],
            "transitions": [
                {"from": "Start", "word": "neutral", "to": "Neutral",
                 "operations": [{"kind": "pop", "symbol": "p"}]}
            ]
        }"#;

        let result: Result<TransitionTable<EmotionState>, _> = TransitionTable::from_json(json);
        assert!(matches!(
            result,
            Err(FormatError::Invalid(BuildError::Malformed { .. }))
        ));
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        let result: Result<TableDocument<EmotionState>, _> = TableDocument::from_json("not json");
        assert!(matches!(result, Err(FormatError::DeserializationFailed(_))));
    }
}
