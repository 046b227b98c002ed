//! Whitespace-separated token reading over any buffered reader.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::ClassifierResult;

/// Reads whitespace-separated tokens one at a time.
///
/// Lines are pulled from the reader only when the tokens already buffered
/// run out, so several values may share a line or span many lines. Tokens
/// are raw bytes; decoding is left to the caller so that undecodable input
/// is only an error for the token that is actually used.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> ClassifierResult<Option<Vec<u8>>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|byte| byte.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
        Ok(self.pending.pop_front())
    }
}
