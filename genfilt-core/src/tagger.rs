//! Part-of-speech and morphological tagging
//!
//! [`Tagger`] is the seam to whatever produces per-token annotations. The
//! built-in [`LexiconTagger`] tags closed-class words listed in a
//! [`LanguageProfile`]; output of an external tagger can be fed in through
//! [`crate::conllu`].

use crate::error::TagError;
use crate::gender::MorphGender;
use crate::language::LanguageProfile;
use crate::tokenizer::{tokenize, TokenizerMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Usual limit on English source sentence length, in characters
pub const DEFAULT_MAX_SENTENCE_CHARS: usize = 1000;

/// Coarse part of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Pronoun,
    Honorific,
    Noun,
    Determiner,
    Adjective,
    Verb,
    Other,
}

impl Pos {
    /// Map a Universal Dependencies UPOS tag
    pub fn from_upos(upos: &str) -> Pos {
        match upos {
            "PRON" => Pos::Pronoun,
            "NOUN" | "PROPN" => Pos::Noun,
            "DET" => Pos::Determiner,
            "ADJ" => Pos::Adjective,
            "VERB" | "AUX" => Pos::Verb,
            _ => Pos::Other,
        }
    }
}

/// A token with its annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub gender: Option<MorphGender>,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: Pos, gender: Option<MorphGender>) -> Self {
        Self {
            text: text.into(),
            pos,
            gender,
        }
    }

    /// Untagged token
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Pos::Other, None)
    }
}

/// Tokens of one sentence, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSentence {
    pub tokens: Vec<Token>,
}

impl TaggedSentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

/// Produces tagged sentences from raw text
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence, TagError>;
}

/// Lexicon-driven tagger built from a language profile
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    mode: TokenizerMode,
    lexicon: HashMap<String, (Pos, MorphGender)>,
    max_chars: Option<usize>,
}

impl LexiconTagger {
    pub fn new(profile: &LanguageProfile) -> Self {
        let mut lexicon = HashMap::new();
        for group in &profile.lexicon {
            for word in &group.words {
                // First listing wins
                lexicon
                    .entry(word.replace('’', "'"))
                    .or_insert((group.pos, group.gender));
            }
        }

        Self {
            mode: profile.tokenizer.mode,
            lexicon,
            max_chars: None,
        }
    }

    /// Set the sentence length limit; `None` disables it
    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Exact match first, then lowercased
    fn lookup(&self, word: &str) -> Option<(Pos, MorphGender)> {
        if let Some(entry) = self.lexicon.get(word) {
            return Some(*entry);
        }
        self.lexicon.get(&word.to_lowercase()).copied()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<TaggedSentence, TagError> {
        if let Some(limit) = self.max_chars {
            let chars = sentence.chars().count();
            if chars > limit {
                return Err(TagError::TooLong { chars, limit });
            }
        }

        let tokens: Vec<Token> = tokenize(sentence, self.mode)
            .into_iter()
            .map(|text| match self.lookup(&text) {
                Some((pos, gender)) => Token::new(text, pos, Some(gender)),
                None => Token::plain(text),
            })
            .collect();

        if tokens.is_empty() {
            return Err(TagError::Empty);
        }

        Ok(TaggedSentence::new(tokens))
    }
}
