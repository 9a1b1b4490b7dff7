//! Moodstack: emotion classification with a word-keyed pushdown automaton
//!
//! A statement is tokenized, stopwords are dropped, and every remaining word
//! is run through a transition table from the start state. Words that land in
//! a recognized state vote for that state's emotion; the most frequent
//! emotion wins.
//!
//! # Core Concepts
//!
//! - **State**: Automaton states via the `State` trait
//! - **Transition table**: Immutable `(state, word) -> (state, stack ops)` rules
//! - **Runner**: Replays a table over tokens, keeping stacks and history
//! - **Classifier**: Tallies per-word verdicts into one [`Emotion`]
//!
//! # Example
//!
//! ```rust
//! use moodstack::{determine_emotion, Emotion};
//!
//! assert_eq!(determine_emotion("I feel happy right now"), Emotion::Positive);
//! assert_eq!(
//!     determine_emotion("I am feeling cashmoney100 right now").to_string(),
//!     "cannot determine"
//! );
//! ```

pub mod config;
pub mod core;
pub mod emotion;
pub mod machine;
mod macros;
pub mod table;
pub mod text;

// Re-export commonly used types
pub use config::{ClassifierConfig, ConfigError};
pub use crate::core::State;
pub use emotion::{
    build_emotion_table, emotion_table, Classification, Classifier, ClassifyError, Emotion,
    EmotionCounts, EmotionState,
};
pub use machine::{Run, RunError, Runner};
pub use table::{Transition, TransitionTable, TransitionTableBuilder};

/// Classify `sentence` with the built-in table, tokenizer, and stopwords.
pub fn determine_emotion(sentence: &str) -> Emotion {
    Classifier::default()
        .emotion(sentence)
        .expect("built-in classifier cannot fail")
}
