//! Reader for pre-computed CoNLL-U annotations
//!
//! Lets the target filter consume the output of an external tagger
//! (spaCy, Stanza, UDPipe) instead of the built-in lexicon tagger. The file
//! must hold exactly one sentence block per target line, in order.

use crate::error::{CoreError, TagError};
use crate::gender::MorphGender;
use crate::tagger::{Pos, TaggedSentence, Token};
use std::io::BufRead;

const COLUMNS: usize = 10;

/// Parse one sentence block
pub fn parse_block(lines: &[String]) -> Result<TaggedSentence, TagError> {
    let mut tokens = Vec::new();

    for line in lines {
        if line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMNS {
            return Err(TagError::Malformed(format!(
                "expected {COLUMNS} columns, found {}: {line:?}",
                columns.len()
            )));
        }

        let id = columns[0];
        // Multiword ranges and empty nodes carry no morphology of their own
        if id.contains('-') || id.contains('.') {
            continue;
        }
        if id.parse::<u32>().is_err() {
            return Err(TagError::Malformed(format!("invalid token id {id:?}")));
        }

        let gender = feature(columns[5], "Gender").map(MorphGender::from_feature);
        tokens.push(Token::new(columns[1], Pos::from_upos(columns[3]), gender));
    }

    if tokens.is_empty() {
        return Err(TagError::Empty);
    }
    Ok(TaggedSentence::new(tokens))
}

/// Value of `name` in a FEATS column (`Gender=Fem|Number=Sing`)
fn feature<'a>(feats: &'a str, name: &str) -> Option<&'a str> {
    if feats == "_" {
        return None;
    }
    feats.split('|').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Supplies one pre-tagged sentence per target line
pub trait AnnotationSource {
    /// Next sentence, `Ok(None)` once exhausted
    fn next_sentence(&mut self) -> Result<Option<Result<TaggedSentence, TagError>>, CoreError>;
}

/// Sequential reader over sentence blocks
pub struct ConlluReader<R> {
    reader: R,
    block: u64,
}

impl<R: BufRead> ConlluReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, block: 0 }
    }

    /// Number of blocks returned so far
    pub fn blocks_read(&self) -> u64 {
        self.block
    }

    /// Next sentence block.
    ///
    /// Returns `Ok(None)` at end of input. A block that fails to decode or
    /// parse is returned as an inner error so the caller can drop just that
    /// sentence.
    pub fn read_block(&mut self) -> Result<Option<Result<TaggedSentence, TagError>>, CoreError> {
        let mut raw: Vec<Vec<u8>> = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.iter().all(u8::is_ascii_whitespace) {
                if raw.is_empty() {
                    continue;
                }
                break;
            }
            let end = buf
                .iter()
                .rposition(|b| !matches!(b, b'\n' | b'\r'))
                .map_or(0, |i| i + 1);
            raw.push(buf[..end].to_vec());
        }

        if raw.is_empty() {
            return Ok(None);
        }
        self.block += 1;
        Ok(Some(decode_lines(raw).and_then(|lines| parse_block(&lines))))
    }
}

fn decode_lines(raw: Vec<Vec<u8>>) -> Result<Vec<String>, TagError> {
    raw.into_iter()
        .map(|bytes| String::from_utf8(bytes).map_err(|e| TagError::Encoding(e.to_string())))
        .collect()
}

impl<R: BufRead> AnnotationSource for ConlluReader<R> {
    fn next_sentence(&mut self) -> Result<Option<Result<TaggedSentence, TagError>>, CoreError> {
        self.read_block()
    }
}
