//! Gender labels and the sentence-level consistency verdict

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentence-level gender requested by the user or assigned by the source filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Feminine (`fem`)
    #[serde(rename = "fem")]
    Feminine,
    /// Masculine (`msc`)
    #[serde(rename = "msc")]
    Masculine,
}

impl Gender {
    /// Short code, also used as the source-filter file extension
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Feminine => "fem",
            Gender::Masculine => "msc",
        }
    }

    /// The other gender
    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Feminine => Gender::Masculine,
            Gender::Masculine => Gender::Feminine,
        }
    }

    /// Token-level gender that agrees with this gender
    pub fn as_morph(&self) -> MorphGender {
        match self {
            Gender::Feminine => MorphGender::Feminine,
            Gender::Masculine => MorphGender::Masculine,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fem" | "feminine" => Ok(Gender::Feminine),
            "msc" | "masc" | "masculine" => Ok(Gender::Masculine),
            _ => Err(CoreError::UnsupportedGender(s.to_string())),
        }
    }
}

/// Grammatical gender of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphGender {
    /// Feminine
    #[serde(alias = "fem")]
    Feminine,
    /// Masculine
    #[serde(alias = "masc", alias = "msc")]
    Masculine,
    /// Neuter
    #[serde(alias = "neut")]
    Neuter,
    /// Gender could not be determined
    Unknown,
}

impl MorphGender {
    /// Map a tagger feature value onto a gender.
    ///
    /// Accepts Universal Dependencies (`Fem`, `Masc`, `Neut`), OpenCorpora
    /// (`femn`, `masc`, `neut`) and DEMorphy (`fem`, `masc`, `neut`) spellings.
    pub fn from_feature(value: &str) -> MorphGender {
        match value.to_lowercase().as_str() {
            "fem" | "femn" | "f" | "feminine" => MorphGender::Feminine,
            "masc" | "msc" | "m" | "masculine" => MorphGender::Masculine,
            "neut" | "n" | "neuter" => MorphGender::Neuter,
            _ => MorphGender::Unknown,
        }
    }
}

/// Outcome of checking a sentence against a requested gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// At least one token agrees and none disagrees
    Consistent,
    /// Only tokens of the other gender were found
    Contradicted,
    /// Tokens of both genders were found
    Mixed,
    /// No gender-bearing token was found
    NoEvidence,
}

impl Verdict {
    /// Judge token genders against the requested gender.
    ///
    /// Neuter and unknown tokens neither confirm nor contradict.
    pub fn judge<I>(genders: I, requested: Gender) -> Verdict
    where
        I: IntoIterator<Item = MorphGender>,
    {
        let wanted = requested.as_morph();
        let other = requested.opposite().as_morph();
        let (mut matching, mut contradicting) = (false, false);

        for gender in genders {
            if gender == wanted {
                matching = true;
            } else if gender == other {
                contradicting = true;
            }
        }

        match (matching, contradicting) {
            (true, false) => Verdict::Consistent,
            (true, true) => Verdict::Mixed,
            (false, true) => Verdict::Contradicted,
            (false, false) => Verdict::NoEvidence,
        }
    }

    /// Whether the sentence pair should be kept
    pub fn is_consistent(&self) -> bool {
        matches!(self, Verdict::Consistent)
    }
}
