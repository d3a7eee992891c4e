//! Sentence tokenization
//!
//! Three modes cover the supported languages. `StripPunctuation` deletes
//! ASCII punctuation before splitting on whitespace, so `Mr.` becomes `Mr`
//! and `Ärztin.` becomes `Ärztin`. `Words` extracts Unicode word runs and
//! keeps an elision apostrophe on the preceding token (`l'amie` gives
//! `l'` and `amie`). `Whitespace` splits on whitespace and trims
//! non-alphanumeric characters from both ends of each token.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How a language profile splits sentences into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// Remove ASCII punctuation, then split on whitespace
    #[default]
    StripPunctuation,
    /// Extract word runs; apostrophes end a token
    Words,
    /// Split on whitespace and trim surrounding punctuation
    Whitespace,
}

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| {
        Regex::new(r"[\p{L}\p{M}\p{N}_]+(?:-[\p{L}\p{M}\p{N}_]+)*['’]?")
            .expect("word pattern is a valid regex")
    })
}

/// Split a sentence into tokens according to `mode`
pub fn tokenize(sentence: &str, mode: TokenizerMode) -> Vec<String> {
    match mode {
        TokenizerMode::StripPunctuation => {
            let stripped: String = sentence
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect();
            stripped.split_whitespace().map(str::to_string).collect()
        }
        TokenizerMode::Words => word_pattern()
            .find_iter(sentence)
            .map(|m| m.as_str().replace('’', "'"))
            .collect(),
        TokenizerMode::Whitespace => sentence
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Number of whitespace-separated words in a line
pub fn count_words(line: &str) -> usize {
    line.split_whitespace().count()
}
