//! Text collaborators: word tokenization and stopword filtering.
//!
//! The classifier only depends on the [`Tokenizer`] and [`StopwordFilter`]
//! traits. [`WordTokenizer`] and [`EnglishStopwords`] are the defaults.

mod stopwords;

pub use stopwords::{EnglishStopwords, StopwordFilter};

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Word runs, including inner hyphens, slashes, periods and apostrophes, or
/// single punctuation marks.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:[-'’/.]\w+)*|['’]\w+|[^\w\s]").unwrap());

/// Error raised by a tokenizer that cannot process its input.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Tokenization failed: {message}")]
pub struct TokenizeError {
    pub message: String,
}

/// Splits text into words.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

/// Treebank-style word tokenizer.
///
/// Punctuation becomes its own token, except inside a word (`"happy-go-lucky"`,
/// `"love/hate"` and `"happy.sad"` stay whole). Contractions are split into a stem
/// and a clitic: `"don't"` gives `"do"`, `"n't"`; `"it's"` gives `"it"`,
/// `"'s"`. Case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn push_word(tokens: &mut Vec<String>, word: &str) {
        let lower = word.to_lowercase();
        let negation = ["n't", "n’t"]
            .into_iter()
            .find(|suffix| lower.len() > suffix.len() && lower.ends_with(suffix));
        if let Some(suffix) = negation {
            let split = word.len() - suffix.len();
            tokens.push(word[..split].to_string());
            tokens.push(word[split..].to_string());
            return;
        }

        match word.char_indices().skip(1).find(|(_, c)| *c == '\'' || *c == '’') {
            Some((split, _)) => {
                tokens.push(word[..split].to_string());
                tokens.push(word[split..].to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let mut tokens = Vec::new();
        for found in WORD_REGEX.find_iter(text) {
            Self::push_word(&mut tokens, found.as_str());
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        WordTokenizer::new().tokenize(text).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens("I feel happy"), vec!["I", "feel", "happy"]);
    }

    #[test]
    fn punctuation_is_a_separate_token() {
        assert_eq!(
            tokens("not good, I hate it."),
            vec!["not", "good", ",", "I", "hate", "it", "."]
        );
    }

    #[test]
    fn inner_hyphens_and_slashes_stay_in_the_word() {
        assert_eq!(tokens("happy-go-lucky"), vec!["happy-go-lucky"]);
        assert_eq!(tokens("a love/hate thing"), vec!["a", "love/hate", "thing"]);
        assert_eq!(tokens("sad-looking"), vec!["sad-looking"]);
    }

    #[test]
    fn only_trailing_periods_are_split() {
        assert_eq!(tokens("happy.sad"), vec!["happy.sad"]);
        assert_eq!(tokens("I am sad."), vec!["I", "am", "sad", "."]);
        assert_eq!(tokens("well - fine"), vec!["well", "-", "fine"]);
    }

    #[test]
    fn alphanumeric_words_stay_whole() {
        assert_eq!(tokens("feeling cashmoney100"), vec!["feeling", "cashmoney100"]);
    }

    #[test]
    fn contractions_split_into_clitics() {
        assert_eq!(tokens("don't"), vec!["do", "n't"]);
        assert_eq!(tokens("it's"), vec!["it", "'s"]);
        assert_eq!(tokens("I'm sad"), vec!["I", "'m", "sad"]);
        assert_eq!(tokens("isn’t"), vec!["is", "n’t"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t\n").is_empty());
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(tokens("Happy HAPPY"), vec!["Happy", "HAPPY"]);
    }
}
