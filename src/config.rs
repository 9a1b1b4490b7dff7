//! Classifier configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid classifier config: {0}")]
    Parse(String),
}

/// Knobs for the classifier. Missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Lowercase each token before the stopword check and table lookup.
    /// Off by default, so only exact words match.
    pub fold_case: bool,

    /// Drop stopwords before running the automaton.
    pub filter_stopwords: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fold_case: false,
            filter_stopwords: true,
        }
    }
}

impl ClassifierConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn fold_case(mut self, enabled: bool) -> Self {
        self.fold_case = enabled;
        self
    }

    pub fn filter_stopwords(mut self, enabled: bool) -> Self {
        self.filter_stopwords = enabled;
        self
    }
}
