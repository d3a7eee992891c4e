//! Source-side classification of English sentences
//!
//! A sentence is feminine-specific when it contains a feminine pronoun and
//! no masculine word (pronoun, honorific or gendered noun). Masculine is
//! defined symmetrically. Rules are tried in order and the first match
//! wins; everything else is unclassified.

use crate::gender::{Gender, MorphGender};
use crate::tagger::{Pos, TaggedSentence};
use serde::{Deserialize, Serialize};

/// Result of classifying one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Feminine,
    Masculine,
    Unclassified,
}

impl Classification {
    pub fn gender(&self) -> Option<Gender> {
        match self {
            Classification::Feminine => Some(Gender::Feminine),
            Classification::Masculine => Some(Gender::Masculine),
            Classification::Unclassified => None,
        }
    }
}

impl From<Gender> for Classification {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Feminine => Classification::Feminine,
            Gender::Masculine => Classification::Masculine,
        }
    }
}

/// Gender cues found in a tagged sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cues {
    pub feminine_pronoun: bool,
    pub masculine_pronoun: bool,
    pub feminine_word: bool,
    pub masculine_word: bool,
}

impl Cues {
    pub fn collect(sentence: &TaggedSentence) -> Self {
        let mut cues = Cues::default();
        for token in sentence.iter() {
            let pronoun = token.pos == Pos::Pronoun;
            match token.gender {
                Some(MorphGender::Feminine) => {
                    cues.feminine_word = true;
                    cues.feminine_pronoun |= pronoun;
                }
                Some(MorphGender::Masculine) => {
                    cues.masculine_word = true;
                    cues.masculine_pronoun |= pronoun;
                }
                _ => {}
            }
        }
        cues
    }

    pub fn has_pronoun(&self, gender: Gender) -> bool {
        match gender {
            Gender::Feminine => self.feminine_pronoun,
            Gender::Masculine => self.masculine_pronoun,
        }
    }

    pub fn has_word(&self, gender: Gender) -> bool {
        match gender {
            Gender::Feminine => self.feminine_word,
            Gender::Masculine => self.masculine_word,
        }
    }
}

/// A predicate over cues and the label it assigns
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&Cues) -> bool,
    pub label: Classification,
}

fn pronoun_without_opposite(cues: &Cues, gender: Gender) -> bool {
    cues.has_pronoun(gender) && !cues.has_word(gender.opposite())
}

fn feminine_pronoun(cues: &Cues) -> bool {
    pronoun_without_opposite(cues, Gender::Feminine)
}

fn masculine_pronoun(cues: &Cues) -> bool {
    pronoun_without_opposite(cues, Gender::Masculine)
}

/// Rules in precedence order
pub const RULES: [Rule; 2] = [
    Rule {
        name: "feminine-pronoun",
        predicate: feminine_pronoun,
        label: Classification::Feminine,
    },
    Rule {
        name: "masculine-pronoun",
        predicate: masculine_pronoun,
        label: Classification::Masculine,
    },
];

/// Rule-based sentence classifier
#[derive(Debug, Clone)]
pub struct SourceClassifier {
    rules: Vec<Rule>,
}

impl Default for SourceClassifier {
    fn default() -> Self {
        Self {
            rules: RULES.to_vec(),
        }
    }
}

impl SourceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// First matching rule, if any
    pub fn matching_rule(&self, sentence: &TaggedSentence) -> Option<&Rule> {
        let cues = Cues::collect(sentence);
        self.rules.iter().find(|rule| (rule.predicate)(&cues))
    }

    pub fn classify(&self, sentence: &TaggedSentence) -> Classification {
        self.matching_rule(sentence)
            .map(|rule| rule.label)
            .unwrap_or(Classification::Unclassified)
    }
}
