//! Emotion states, labels, and the built-in word table.
//!
//! The automaton has one start state and four recognized states, one per
//! emotion. Each recognized state maps to exactly one [`Emotion`]; the start
//! state maps to none.

mod classifier;
mod counts;

pub use classifier::{Classification, Classifier, ClassifyError, RecognizedWord};
pub use counts::EmotionCounts;

use crate::core::StackOperation;
use crate::state_enum;
use crate::table::{TransitionTable, TransitionTableBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

state_enum! {
    /// Automaton states for emotion recognition.
    pub enum EmotionState {
        Start,
        Positive,
        Negative,
        Neutral,
        Excited,
    }
    final: [Positive, Negative, Neutral, Excited]
}

impl EmotionState {
    /// The emotion a recognized state stands for.
    pub fn label(&self) -> Option<Emotion> {
        match self {
            Self::Start => None,
            Self::Positive => Some(Emotion::Positive),
            Self::Negative => Some(Emotion::Negative),
            Self::Neutral => Some(Emotion::Neutral),
            Self::Excited => Some(Emotion::Excited),
        }
    }
}

/// Sentence-level verdict.
///
/// `Indeterminate` is only ever produced by the classifier when no word was
/// recognized; no automaton state maps to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
    Excited,
    #[serde(rename = "cannot determine")]
    Indeterminate,
}

impl Emotion {
    /// Recognized labels in tie-break order.
    pub const RECOGNIZED: [Emotion; 4] = [
        Emotion::Positive,
        Emotion::Negative,
        Emotion::Neutral,
        Emotion::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Excited => "excited",
            Self::Indeterminate => "cannot determine",
        }
    }

    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::Indeterminate)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack alphabet of the built-in table: positive, negative, excited,
/// love, hate, anger, dislike.
pub const EMOTION_STACK_ALPHABET: [char; 7] = ['p', 'n', 'e', 'l', 'h', 'a', 'd'];

static EMOTION_TABLE: LazyLock<TransitionTable<EmotionState>> = LazyLock::new(|| {
    build_emotion_table().expect("built-in emotion table is well formed")
});

/// The process-wide built-in emotion table.
pub fn emotion_table() -> &'static TransitionTable<EmotionState> {
    &EMOTION_TABLE
}

/// Build a fresh copy of the built-in emotion table.
pub fn build_emotion_table() -> Result<TransitionTable<EmotionState>, crate::table::BuildError> {
    use EmotionState::*;
    let push = StackOperation::push;

    TransitionTableBuilder::new()
        .initial(Start)
        .alphabet(EMOTION_STACK_ALPHABET)
        .transition(Start, "happy", Positive, [push('p'), push('e')])
        .transition(Start, "sad", Negative, [push('n')])
        .transition(Start, "neutral", Neutral, [push('n')])
        .transition(Start, "love", Positive, [push('p'), push('l')])
        .transition(Start, "hate", Negative, [push('n'), push('h')])
        .transition(Start, "angry", Negative, [push('n'), push('a')])
        .transition(Start, "excited", Excited, [push('e')])
        .transition(Start, "dislike", Negative, [push('n'), push('d')])
        .transition(Positive, "happy", Positive, [push('p'), push('e')])
        .transition(Negative, "sad", Negative, [push('n')])
        .transition(Neutral, "neutral", Neutral, [push('n')])
        .transition(Excited, "excited", Excited, [push('e')])
        .build()
}
