//! Property tests for the line pipelines

use genfilt_core::language::get_profile;
use genfilt_core::{
    FilterSettings, Gender, LexiconTagger, MorphGender, ResolverConfig, SourceFilter, Tagger,
    TargetFilter, TargetLanguage,
};
use proptest::prelude::*;
use std::io::Cursor;

const ENGLISH_WORDS: &[&str] = &[
    "She", "she", "her", "He", "he", "his", "him", "Mr.", "Mrs.", "mother", "father", "doctor",
    "arrived", "the", "a", "is", "said,", "hello!", "\"quoted\"", "it", "they", "nurse",
];

const FRENCH_WORDS: &[&str] = &[
    "Elle", "il", "la", "le", "une", "un", "médecin", "infirmière", "est", "arrivée", "arrivé",
    "bien", "et", "l'amie", "ce", "cette", "!", "ils",
];

fn sentence(words: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(words), 0..8).prop_map(|w| w.join(" "))
}

fn corpus(words: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(words), 0..20)
}

fn join(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

fn split(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn run_source(input: &str) -> (Vec<u8>, Vec<u8>) {
    let filter = SourceFilter::english(&FilterSettings::default()).unwrap();
    let (mut fem, mut msc) = (Vec::new(), Vec::new());
    filter
        .run(Cursor::new(input.as_bytes()), &mut fem, &mut msc, &())
        .unwrap();
    (fem, msc)
}

fn run_target(gender: Gender, source: &str, target: &str) -> (Vec<u8>, Vec<u8>) {
    let filter = TargetFilter::for_language(
        TargetLanguage::French,
        gender,
        &ResolverConfig::default(),
        &FilterSettings::default(),
    )
    .unwrap();
    let (mut src_out, mut trg_out) = (Vec::new(), Vec::new());
    filter
        .run(
            Cursor::new(source.as_bytes()),
            Cursor::new(target.as_bytes()),
            None,
            &mut src_out,
            &mut trg_out,
            &(),
        )
        .unwrap();
    (src_out, trg_out)
}

fn has_cue(tagger: &LexiconTagger, line: &str, gender: MorphGender) -> bool {
    tagger
        .tag(line)
        .map(|sentence| sentence.iter().any(|t| t.gender == Some(gender)))
        .unwrap_or(false)
}

proptest! {
    #[test]
    fn prop_source_partitions_have_no_opposite_cue(lines in corpus(ENGLISH_WORDS)) {
        let (fem, msc) = run_source(&join(&lines));
        let tagger = LexiconTagger::new(get_profile("en").unwrap());

        for line in split(&fem) {
            prop_assert!(!has_cue(&tagger, &line, MorphGender::Masculine), "{line:?}");
        }
        for line in split(&msc) {
            prop_assert!(!has_cue(&tagger, &line, MorphGender::Feminine), "{line:?}");
        }
    }

    #[test]
    fn prop_source_outputs_are_input_lines(lines in corpus(ENGLISH_WORDS)) {
        let (fem, msc) = run_source(&join(&lines));
        let fem_lines = split(&fem);
        let msc_lines = split(&msc);

        prop_assert!(fem_lines.len() + msc_lines.len() <= lines.len());
        for line in fem_lines.iter().chain(&msc_lines) {
            prop_assert!(lines.contains(line));
        }
    }

    #[test]
    fn prop_source_is_idempotent(lines in corpus(ENGLISH_WORDS)) {
        let input = join(&lines);
        prop_assert_eq!(run_source(&input), run_source(&input));
    }

    #[test]
    fn prop_target_keeps_ordered_subsequence(
        pairs in prop::collection::vec((sentence(ENGLISH_WORDS), sentence(FRENCH_WORDS)), 0..20),
        feminine in any::<bool>(),
    ) {
        let gender = if feminine { Gender::Feminine } else { Gender::Masculine };
        let sources: Vec<String> = pairs.iter().map(|(s, _)| s.clone()).collect();
        let targets: Vec<String> = pairs.iter().map(|(_, t)| t.clone()).collect();

        let (src_out, trg_out) = run_target(gender, &join(&sources), &join(&targets));
        let kept: Vec<(String, String)> = split(&src_out)
            .into_iter()
            .zip(split(&trg_out))
            .collect();
        prop_assert_eq!(split(&src_out).len(), split(&trg_out).len());

        let mut remaining = pairs.iter();
        for pair in &kept {
            prop_assert!(remaining.any(|p| p == pair), "{pair:?} out of order or invented");
        }
    }

    #[test]
    fn prop_target_is_idempotent(
        pairs in prop::collection::vec((sentence(ENGLISH_WORDS), sentence(FRENCH_WORDS)), 0..20),
    ) {
        let sources: Vec<String> = pairs.iter().map(|(s, _)| s.clone()).collect();
        let targets: Vec<String> = pairs.iter().map(|(_, t)| t.clone()).collect();
        let (source, target) = (join(&sources), join(&targets));

        prop_assert_eq!(
            run_target(Gender::Feminine, &source, &target),
            run_target(Gender::Feminine, &source, &target)
        );
    }
}
