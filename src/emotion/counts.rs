//! Per-call emotion tallies.

use super::Emotion;
use serde::{Deserialize, Serialize};

/// Tally of recognized words per emotion for one classification call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub excited: usize,
}

impl EmotionCounts {
    /// Count one more occurrence. `Indeterminate` is never counted.
    pub fn increment(&mut self, emotion: Emotion) {
        match emotion {
            Emotion::Positive => self.positive += 1,
            Emotion::Negative => self.negative += 1,
            Emotion::Neutral => self.neutral += 1,
            Emotion::Excited => self.excited += 1,
            Emotion::Indeterminate => {}
        }
    }

    pub fn get(&self, emotion: Emotion) -> usize {
        match emotion {
            Emotion::Positive => self.positive,
            Emotion::Negative => self.negative,
            Emotion::Neutral => self.neutral,
            Emotion::Excited => self.excited,
            Emotion::Indeterminate => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.excited
    }

    /// `(emotion, count)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        Emotion::RECOGNIZED.into_iter().map(|e| (e, self.get(e)))
    }

    /// The most frequent emotion.
    ///
    /// Ties go to whichever comes first in [`Emotion::RECOGNIZED`]; an empty
    /// tally is `Indeterminate`.
    pub fn dominant(&self) -> Emotion {
        let mut best = (Emotion::Indeterminate, 0);
        for (emotion, count) in self.iter() {
            if count > best.1 {
                best = (emotion, count);
            }
        }
        best.0
    }
}
