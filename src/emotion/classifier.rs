//! Sentence-level emotion classification.
//!
//! Every surviving word is run on its own from the start state, so the
//! verdict for a word never depends on the words around it.

use super::counts::EmotionCounts;
use super::{emotion_table, Emotion, EmotionState};
use crate::config::ClassifierConfig;
use crate::machine::{RunError, Runner};
use crate::table::TransitionTable;
use crate::text::{EnglishStopwords, StopwordFilter, TokenizeError, Tokenizer, WordTokenizer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while classifying a statement
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Run(#[from] RunError),
}

/// A word that reached a recognized state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedWord {
    pub word: String,
    pub emotion: Emotion,
}

/// Outcome of classifying one statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub emotion: Emotion,
    pub counts: EmotionCounts,
    /// Recognized words in input order
    pub recognized: Vec<RecognizedWord>,
}

/// Classifies statements against an emotion transition table.
///
/// Holds only shared, read-only data; counts and stacks live inside each
/// call.
///
/// # Example
///
/// ```rust
/// use moodstack::{Classifier, Emotion};
///
/// let classifier = Classifier::default();
/// let result = classifier.classify("I love it, I hate it, I love it").unwrap();
///
/// assert_eq!(result.emotion, Emotion::Positive);
/// assert_eq!(result.counts.positive, 2);
/// assert_eq!(result.counts.negative, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Classifier<'t, T = WordTokenizer, F = EnglishStopwords> {
    table: &'t TransitionTable<EmotionState>,
    tokenizer: T,
    stopwords: F,
    config: ClassifierConfig,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(emotion_table())
    }
}

impl<'t> Classifier<'t> {
    /// Classifier over `table` with the default tokenizer and stopwords.
    pub fn new(table: &'t TransitionTable<EmotionState>) -> Self {
        Self {
            table,
            tokenizer: WordTokenizer::new(),
            stopwords: EnglishStopwords::new(),
            config: ClassifierConfig::default(),
        }
    }
}

impl<'t, T: Tokenizer, F: StopwordFilter> Classifier<'t, T, F> {
    /// Replace the tokenizer.
    pub fn with_tokenizer<U: Tokenizer>(self, tokenizer: U) -> Classifier<'t, U, F> {
        Classifier {
            table: self.table,
            tokenizer,
            stopwords: self.stopwords,
            config: self.config,
        }
    }

    /// Replace the stopword filter.
    pub fn with_stopwords<G: StopwordFilter>(self, stopwords: G) -> Classifier<'t, T, G> {
        Classifier {
            table: self.table,
            tokenizer: self.tokenizer,
            stopwords,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a statement and keep the tallies behind the verdict.
    pub fn classify(&self, statement: &str) -> Result<Classification, ClassifyError> {
        let runner = Runner::new(self.table);
        let mut counts = EmotionCounts::default();
        let mut recognized = Vec::new();

        for token in self.tokenizer.tokenize(statement)? {
            let word = if self.config.fold_case {
                token.to_lowercase()
            } else {
                token
            };
            if self.config.filter_stopwords && self.stopwords.is_stopword(&word) {
                continue;
            }

            let state = runner.run_from_initial([word.as_str()])?;
            if let Some(emotion) = state.label() {
                counts.increment(emotion);
                recognized.push(RecognizedWord { word, emotion });
            }
        }

        let emotion = counts.dominant();
        tracing::debug!(
            "Classified statement as {} (positive={}, negative={}, neutral={}, excited={})",
            emotion,
            counts.positive,
            counts.negative,
            counts.neutral,
            counts.excited
        );

        Ok(Classification {
            emotion,
            counts,
            recognized,
        })
    }

    /// Classify a statement, returning only the verdict.
    pub fn emotion(&self, statement: &str) -> Result<Emotion, ClassifyError> {
        self.classify(statement).map(|c| c.emotion)
    }
}
