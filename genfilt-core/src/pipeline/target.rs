use super::{LineReader, Progress, RawLine};
use crate::conllu::AnnotationSource;
use crate::error::{CoreError, Result, TagError};
use crate::gender::{Gender, Verdict};
use crate::language::{get_profile, TargetLanguage};
use crate::resolver::{GenderResolver, Resolver, ResolverConfig};
use crate::settings::FilterSettings;
use crate::tagger::{LexiconTagger, TaggedSentence, Tagger};
use crate::tokenizer::count_words;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Counts gathered during a target-filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetStats {
    pub total: u64,
    pub kept: u64,
    /// Target side too long relative to the source side
    pub dropped_length: u64,
    pub contradicted: u64,
    pub mixed: u64,
    pub no_evidence: u64,
    /// Pairs that could not be decoded or tagged
    pub skipped: u64,
}

impl TargetStats {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Consistent => self.kept += 1,
            Verdict::Contradicted => self.contradicted += 1,
            Verdict::Mixed => self.mixed += 1,
            Verdict::NoEvidence => self.no_evidence += 1,
        }
    }
}

/// Keeps parallel pairs whose target side agrees with one gender
pub struct TargetFilter<T = LexiconTagger, G = Resolver> {
    language: TargetLanguage,
    gender: Gender,
    tagger: T,
    resolver: G,
    settings: FilterSettings,
}

impl TargetFilter<LexiconTagger, Resolver> {
    /// Build the filter for `language` with the built-in tagger.
    ///
    /// Fails on invalid settings or when the language's resources (German
    /// dictionary, profile override) cannot be loaded.
    pub fn for_language(
        language: TargetLanguage,
        gender: Gender,
        config: &ResolverConfig,
        settings: &FilterSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let profile = match &config.profile {
            Some(profile) => profile,
            None => get_profile(language.code())?,
        };
        let tagger = LexiconTagger::new(profile).with_max_chars(settings.max_sentence_chars);
        let resolver = Resolver::for_language(language, config)?;
        log::info!(
            "Filtering {} targets for gender {} using {}",
            language.name(),
            gender,
            resolver.strategy()
        );

        Ok(Self::new(language, gender, tagger, resolver, *settings))
    }
}

impl<T: Tagger, G: GenderResolver> TargetFilter<T, G> {
    pub fn new(
        language: TargetLanguage,
        gender: Gender,
        tagger: T,
        resolver: G,
        settings: FilterSettings,
    ) -> Self {
        Self {
            language,
            gender,
            tagger,
            resolver,
            settings,
        }
    }


    /// Verdict for one target sentence
    pub fn judge(&self, sentence: &TaggedSentence) -> Verdict {
        self.resolver.verdict(sentence, self.gender)
    }

    /// Filter a parallel corpus.
    ///
    /// `source` and `target` are read in lockstep and must have the same
    /// number of lines. When `annotations` is given, its sentence blocks
    /// replace the built-in tagger, one block per target line. Kept pairs
    /// are written in input order, byte for byte.
    pub fn run<RS, RT, WS, WT>(
        &self,
        source: RS,
        target: RT,
        mut annotations: Option<&mut dyn AnnotationSource>,
        source_out: &mut WS,
        target_out: &mut WT,
        progress: &dyn Progress,
    ) -> Result<TargetStats>
    where
        RS: BufRead,
        RT: BufRead,
        WS: Write,
        WT: Write,
    {
        let mut sources = LineReader::new(source);
        let mut targets = LineReader::new(target);
        let mut stats = TargetStats::default();

        loop {
            let (src, trg) = match (sources.next_line()?, targets.next_line()?) {
                (None, None) => break,
                (Some(src), Some(trg)) => (src, trg),
                (Some(src), None) => {
                    return Err(CoreError::Misaligned {
                        what: "target input".into(),
                        line: src.number,
                    })
                }
                (None, Some(trg)) => {
                    return Err(CoreError::Misaligned {
                        what: "source input".into(),
                        line: trg.number,
                    })
                }
            };
            stats.total += 1;
            progress.advance(1);

            // Consume the block before any early exit to stay aligned
            let annotated = match annotations.as_deref_mut() {
                Some(source) => match source.next_sentence()? {
                    Some(sentence) => Some(sentence),
                    None => {
                        return Err(CoreError::Misaligned {
                            what: "annotations".into(),
                            line: trg.number,
                        })
                    }
                },
                None => None,
            };

            match self.check_pair(&src, &trg, annotated) {
                Ok(Some(verdict)) => {
                    stats.record(verdict);
                    if verdict.is_consistent() {
                        source_out.write_all(&src.bytes)?;
                        target_out.write_all(&trg.bytes)?;
                    }
                }
                Ok(None) => stats.dropped_length += 1,
                Err(TagError::Empty) => stats.no_evidence += 1,
                Err(e @ TagError::TooLong { .. }) => {
                    log::debug!("Skipping pair {}: {}", trg.number, e);
                    stats.skipped += 1;
                }
                Err(e) => {
                    log::warn!("Skipping pair {}: {}", trg.number, e);
                    stats.skipped += 1;
                }
            }
        }

        if let Some(source) = annotations {
            if source.next_sentence()?.is_some() {
                log::warn!(
                    "Annotations contain more sentences than the {} target lines",
                    stats.total
                );
            }
        }

        source_out.flush()?;
        target_out.flush()?;
        log::debug!(
            "{} {} filter finished: {:?}",
            self.language.name(),
            self.gender,
            stats
        );
        Ok(stats)
    }

    /// Verdict for one pair, or `None` when the length check drops it
    fn check_pair(
        &self,
        src: &RawLine,
        trg: &RawLine,
        annotated: Option<std::result::Result<TaggedSentence, TagError>>,
    ) -> std::result::Result<Option<Verdict>, TagError> {
        let src_text = src.text()?;
        let trg_text = trg.text()?;

        if self
            .settings
            .exceeds_length_ratio(count_words(src_text), count_words(trg_text))
        {
            return Ok(None);
        }

        let sentence = match annotated {
            Some(sentence) => sentence?,
            None => self.tagger.tag(trg_text)?,
        };
        Ok(Some(self.judge(&sentence)))
    }
}
