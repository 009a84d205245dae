//! Whitespace-separated token reader for interactive input.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Errors from reading a prompted value.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input closed before a value was read
    #[error("end of input")]
    Eof,

    /// A token was read but did not parse
    #[error("expected {expected}, got {token:?}")]
    Invalid {
        expected: &'static str,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads tokens one at a time, pulling new lines as needed.
///
/// Several values may be typed on one line; a value may also be typed on a
/// later line than its prompt.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-free token.
    pub fn token(&mut self) -> Result<String, PromptError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`.
    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, PromptError> {
        let token = self.token()?;
        token
            .parse()
            .map_err(|_| PromptError::Invalid { expected, token })
    }

    /// Drop whatever is left of the current line.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
