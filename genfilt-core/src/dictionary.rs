//! Morphological dictionary for German nouns
//!
//! Reads the plain-text dump of the DEMorphy German morphological
//! dictionaries. Each analysis line holds a surface form followed by a
//! comma-separated tag list whose first two fields are the part of speech
//! and the gender:
//!
//! ```text
//! Ärztin NN,fem,nom,sg
//! Arzt NN,masc,nom,sg
//! ```
//!
//! Only feminine and masculine noun (`NN`) analyses are kept. A form analysed
//! as both is ambiguous and left out of the dictionary; neuter analyses do not
//! count towards that.

use crate::error::{CoreError, Result};
use crate::gender::MorphGender;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Immutable mapping from lowercased surface form to gender
#[derive(Debug, Clone, Default)]
pub struct MorphDictionary {
    entries: HashMap<String, MorphGender>,
}

impl MorphDictionary {
    /// Load the dictionary from a DEMorphy dump.
    ///
    /// A missing file is reported as [`CoreError::DictionaryNotFound`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CoreError::DictionaryNotFound {
                path: path.to_path_buf(),
            },
            _ => CoreError::Io(e),
        })?;

        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} gendered forms from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build the dictionary from any line source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut genders: HashMap<String, HashSet<MorphGender>> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            if let Some((form, gender)) = parse_entry(&line) {
                genders.entry(form).or_default().insert(gender);
            }
        }

        let entries = genders
            .into_iter()
            .filter_map(|(form, set)| {
                if set.len() == 1 {
                    set.into_iter().next().map(|gender| (form, gender))
                } else {
                    None
                }
            })
            .collect();

        Ok(Self { entries })
    }

    /// Gender of a word; the lookup is case-insensitive
    pub fn lookup(&self, word: &str) -> Option<MorphGender> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MorphGender)> for MorphDictionary {
    fn from_iter<I: IntoIterator<Item = (String, MorphGender)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(form, gender)| (form.to_lowercase(), gender))
                .collect(),
        }
    }
}

/// Parse one analysis line into a lowercased form and its noun gender
fn parse_entry(line: &str) -> Option<(String, MorphGender)> {
    let mut fields = line.split_whitespace();
    let form = fields.next()?;
    let tags: Vec<&str> = fields.next()?.split(',').collect();

    if tags.len() < 3 || tags[0] != "NN" {
        return None;
    }

    match MorphGender::from_feature(tags[1]) {
        gender @ (MorphGender::Feminine | MorphGender::Masculine) => {
            Some((form.to_lowercase(), gender))
        }
        _ => None,
    }
}
