//! Line-by-line filtering pipelines
//!
//! Both filters read raw lines, classify them, and copy accepted lines to
//! their outputs byte for byte. Per-line failures are logged and skipped;
//! only I/O errors and misaligned inputs abort a run.

pub mod source;
pub mod target;

pub use source::{SourceFilter, SourceStats};
pub use target::{TargetFilter, TargetStats};

use crate::error::{Result, TagError};
use std::io::BufRead;

/// Receives a notification for every input line consumed
pub trait Progress {
    fn advance(&self, lines: u64);
}

impl Progress for () {
    fn advance(&self, _lines: u64) {}
}

/// One line as read from disk, terminator included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based line number
    pub number: u64,
    pub bytes: Vec<u8>,
}

impl RawLine {
    /// Line content without its terminator
    pub fn text(&self) -> std::result::Result<&str, TagError> {
        std::str::from_utf8(&self.bytes)
            .map(|s| s.trim_end_matches(['\n', '\r']))
            .map_err(|e| TagError::Encoding(e.to_string()))
    }
}

/// Reads raw lines without requiring valid UTF-8
pub struct LineReader<R> {
    reader: R,
    number: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, number: 0 }
    }

    pub fn next_line(&mut self) -> Result<Option<RawLine>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.number += 1;
        Ok(Some(RawLine {
            number: self.number,
            bytes,
        }))
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> u64 {
        self.number
    }
}
