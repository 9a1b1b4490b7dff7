//! Run history tracking.
//!
//! Records every transition that fired while the runner consumed its input,
//! in order. Words that matched no transition leave no record.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use moodstack::core::StepRecord;
/// use moodstack::EmotionState;
/// use chrono::Utc;
///
/// let step = StepRecord {
///     from: EmotionState::Start,
///     to: EmotionState::Positive,
///     word: "happy".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.word, "happy");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<S: State> {
    /// The state the step left
    pub from: S,
    /// The state the step entered
    pub to: S,
    /// The input word that fired the transition
    pub word: String,
    /// When the step fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions for one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunHistory<S: State> {
    steps: Vec<StepRecord<S>>,
}

impl<S: State> Default for RunHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> RunHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a fired step.
    pub fn record(&mut self, step: StepRecord<S>) {
        self.steps.push(step);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state the first step left,
    /// then the `to` state of each step. Empty when nothing fired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moodstack::core::{RunHistory, StepRecord};
    /// use moodstack::EmotionState;
    /// use chrono::Utc;
    ///
    /// let mut history = RunHistory::new();
    /// history.record(StepRecord {
    ///     from: EmotionState::Start,
    ///     to: EmotionState::Positive,
    ///     word: "happy".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    /// history.record(StepRecord {
    ///     from: EmotionState::Positive,
    ///     to: EmotionState::Positive,
    ///     word: "happy".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.get_path();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], &EmotionState::Start);
    /// assert_eq!(path[2], &EmotionState::Positive);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Words that fired a transition, in input order.
    pub fn words(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.word.as_str()).collect()
    }

    /// Get all steps.
    pub fn steps(&self) -> &[StepRecord<S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
