//! Gender-based filtering of corpora for machine-translation self-training
//!
//! The crate provides the two filters of a gender-balancing pipeline:
//!
//! - **Source filtering** splits monolingual English text into
//!   feminine-specific and masculine-specific sentences, using gendered
//!   pronouns, honorifics and nouns as cues.
//! - **Target filtering** keeps parallel sentence pairs whose target side
//!   (German, French, Italian, Hebrew or Russian) agrees morphologically
//!   with a requested gender.
//!
//! Accepted lines are copied byte for byte, so the outputs can be fed back
//! into a training pipeline unchanged.
//!
//! # Example
//!
//! ```rust
//! use genfilt_core::{FilterSettings, SourceFilter};
//! use std::io::Cursor;
//!
//! let filter = SourceFilter::english(&FilterSettings::default()).unwrap();
//! let input = "She is a doctor.\nHe is a doctor.\nThe doctor arrived.\n";
//!
//! let (mut fem, mut msc) = (Vec::new(), Vec::new());
//! let stats = filter.run(Cursor::new(input), &mut fem, &mut msc, &()).unwrap();
//!
//! assert_eq!(fem, b"She is a doctor.\n");
//! assert_eq!(msc, b"He is a doctor.\n");
//! assert_eq!(stats.unclassified, 1);
//! ```

pub mod conllu;
pub mod dictionary;
pub mod error;
pub mod gender;
pub mod language;
pub mod pipeline;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod tagger;
pub mod tokenizer;

pub use conllu::{AnnotationSource, ConlluReader};
pub use dictionary::MorphDictionary;
pub use error::{CoreError, Result, TagError};
pub use gender::{Gender, MorphGender, Verdict};
pub use language::{LanguageProfile, TargetLanguage};
pub use pipeline::{Progress, SourceFilter, SourceStats, TargetFilter, TargetStats};
pub use resolver::{GenderResolver, Resolver, ResolverConfig};
pub use settings::FilterSettings;
pub use source::{Classification, SourceClassifier};
pub use tagger::{LexiconTagger, Pos, TaggedSentence, Tagger, Token};
