use super::{LineReader, Progress};
use crate::error::{Result, TagError};
use crate::language::{get_profile, SOURCE_LANGUAGE};
use crate::settings::FilterSettings;
use crate::source::{Classification, SourceClassifier};
use crate::tagger::{LexiconTagger, Tagger};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Counts gathered during a source-filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    pub total: u64,
    pub feminine: u64,
    pub masculine: u64,
    pub unclassified: u64,
    /// Lines that could not be decoded or tagged
    pub skipped: u64,
}

/// Splits English text into feminine and masculine partitions
pub struct SourceFilter<T = LexiconTagger> {
    tagger: T,
    classifier: SourceClassifier,
}

impl SourceFilter<LexiconTagger> {
    /// Filter using the built-in English profile
    pub fn english(settings: &FilterSettings) -> Result<Self> {
        settings.validate()?;
        let tagger =
            LexiconTagger::new(get_profile(SOURCE_LANGUAGE)?).with_max_chars(settings.max_sentence_chars);
        Ok(Self::new(tagger))
    }
}

impl<T: Tagger> SourceFilter<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            classifier: SourceClassifier::new(),
        }
    }

    /// Classify one line of text
    pub fn classify(&self, line: &str) -> std::result::Result<Classification, TagError> {
        match self.tagger.tag(line) {
            Ok(sentence) => Ok(self.classifier.classify(&sentence)),
            Err(TagError::Empty) => Ok(Classification::Unclassified),
            Err(e) => Err(e),
        }
    }

    /// Read `input` and copy gender-specific lines to the two outputs.
    ///
    /// Output lines are byte-identical to input lines. Both writers are
    /// flushed before returning.
    pub fn run<R, F, M>(
        &self,
        input: R,
        feminine: &mut F,
        masculine: &mut M,
        progress: &dyn Progress,
    ) -> Result<SourceStats>
    where
        R: BufRead,
        F: Write,
        M: Write,
    {
        let mut reader = LineReader::new(input);
        let mut stats = SourceStats::default();

        while let Some(line) = reader.next_line()? {
            stats.total += 1;
            progress.advance(1);

            let classification = match line.text().and_then(|text| self.classify(text)) {
                Ok(classification) => classification,
                Err(e @ TagError::TooLong { .. }) => {
                    log::debug!("Skipping line {}: {}", line.number, e);
                    stats.skipped += 1;
                    continue;
                }
                Err(e) => {
                    log::warn!("Skipping line {}: {}", line.number, e);
                    stats.skipped += 1;
                    continue;
                }
            };

            match classification {
                Classification::Feminine => {
                    feminine.write_all(&line.bytes)?;
                    stats.feminine += 1;
                }
                Classification::Masculine => {
                    masculine.write_all(&line.bytes)?;
                    stats.masculine += 1;
                }
                Classification::Unclassified => stats.unclassified += 1,
            }
        }

        feminine.flush()?;
        masculine.flush()?;
        Ok(stats)
    }
}
