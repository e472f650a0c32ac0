//! Line source with single-line pushback.
//!
//! The block parser reads one line at a time and sometimes discovers, after
//! a recursive call returns, that the last line it read belongs to an
//! ancestor block. `LineSource` lets that call hand the line back: the next
//! `next_line` returns it again instead of reading the stream. At most one
//! line is ever pending, because the parser always consumes a pushed-back
//! line before it can push back another.

use crate::error::Result;
use std::io::BufRead;

/// A line-oriented reader with one line of lookahead.
pub struct LineSource<R> {
    reader: R,
    pending: Option<String>,
    line_num: usize,
    started: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line_num: 0,
            started: false,
        }
    }

    /// Return the next physical line, with the trailing newline stripped and
    /// trailing spaces trimmed, or `None` at end of stream.
    ///
    /// A pushed-back line is returned before the stream is read again.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if self.started {
            self.line_num += 1;
        }
        self.started = true;
        while buf.ends_with('\n') || buf.ends_with('\r') || buf.ends_with(' ') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Make `line` be returned by the next `next_line` call.
    ///
    /// Only the line most recently returned may be pushed back, and only one
    /// line may be pending at a time.
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.pending.is_none(), "pushback already pending");
        self.pending = Some(line);
    }

    /// Zero-based number of the most recently returned line.
    ///
    /// Pushback does not change the count: the pushed-back line keeps its
    /// number when it is returned again.
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}
