// crates/linescrub-core/src/source.rs
//
// Splits a byte stream into raw lines.
// - '\n' terminates a line; one '\r' right before it (or before EOF) is dropped
// - an unterminated final line still counts; empty input yields nothing
// - invalid UTF-8 is decoded lossily
// - a line plus its terminator must fit in the limit; an unterminated final
//   line must be shorter than it. Anything else is fatal and ends the stream

use std::io::{BufRead, Read};

use crate::error::{Result, ScrubError};

/// One input line with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: u64,
    pub text: String,
}

pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: u64,
    max_line_len: usize,
    done: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, max_line_len: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            max_line_len,
            done: false,
        }
    }

    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    fn read_next(&mut self) -> Result<Option<RawLine>> {
        self.buf.clear();

        // One byte past the limit is enough to tell an over-long line apart.
        let limit = self.max_line_len as u64 + 1;
        let n = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| ScrubError::io(format!("read line {}", self.line_no + 1), e))?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let terminated = self.buf.last() == Some(&b'\n');
        let too_long = if terminated {
            n > self.max_line_len
        } else {
            n >= self.max_line_len
        };
        if too_long {
            return Err(ScrubError::LineTooLong {
                line: self.line_no,
                max: self.max_line_len,
            });
        }

        if terminated {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        Ok(Some(RawLine {
            number: self.line_no,
            text: String::from_utf8_lossy(&self.buf).into_owned(),
        }))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_next() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
