//! Line-oriented token input
//!
//! One line is one token. Tokens are raw bytes: only the `\n` terminator is
//! removed, so a `\r` before it or bytes that are not valid UTF-8 stay part
//! of the token and keep it distinct from every other line.

use std::io::{self, BufRead};

/// Advisory per-word capacity for the line buffer
pub const WORD_CAPACITY_HINT: usize = 32;

/// Reads tokens from any buffered source, reusing one line buffer
pub struct TokenReader<R> {
    reader: R,
    bytes: Vec<u8>,
    tokens_read: u64,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::with_capacity(WORD_CAPACITY_HINT),
            tokens_read: 0,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// The returned slice is valid until the next call.
    pub fn next_token(&mut self) -> io::Result<Option<&[u8]>> {
        self.bytes.clear();
        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(None);
        }
        if self.bytes.last() == Some(&b'\n') {
            self.bytes.pop();
        }

        self.tokens_read += 1;
        Ok(Some(&self.bytes))
    }

    /// Number of lines consumed so far
    pub fn tokens_read(&self) -> u64 {
        self.tokens_read
    }
}
