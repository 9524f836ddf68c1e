use crate::error::{ReplaceError, Result};
use crate::input::LineSource;
use crate::replace::{Symbol, replace_in_place, symbols};
use log::{debug, info};
use std::collections::VecDeque;
use std::io::Write;

pub const STRING_PROMPT: &str = "Enter string: ";
pub const MATCH_PROMPT: &str = "Enter character to be replaced = ";
pub const REPLACEMENT_PROMPT: &str = "Enter replacing character = ";

/// Validated settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    stop_word: String,
}

impl SessionConfig {
    /// Build a config that ends the session on `stop_word`.
    pub fn new(stop_word: impl Into<String>) -> Result<Self> {
        let stop_word = stop_word.into();
        if stop_word.is_empty() {
            return Err(ReplaceError::EmptyStopWord);
        }
        Ok(Self { stop_word })
    }

    pub fn stop_word(&self) -> &str {
        &self.stop_word
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stop_word: "stop".to_string(),
        }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user entered the stop word.
    Stopped,
    /// Input ran out before the stop word was seen.
    EndOfInput,
}

/// Interactive loop: read a line, read two characters, print the substituted line.
///
/// Characters are read like tokens: leading whitespace (newlines included) is
/// skipped, where whitespace means the six ASCII characters C's `isspace`
/// accepts. Any other symbol, a stray non-UTF-8 byte included, is a valid
/// answer. `l L` on one line and `l` and `L` on separate lines are the
/// same answer. Whatever follows the second character on its line is dropped.
///
/// Example
/// ```
/// use charswap::{Outcome, Session, SessionConfig, StreamSource};
/// use std::io::Cursor;
///
/// let input = Cursor::new(b"hello\nl L\nstop\n".to_vec());
/// let mut session = Session::new(Box::new(StreamSource::new(input)), SessionConfig::default());
/// let mut out = Vec::new();
/// assert_eq!(session.run(&mut out).unwrap(), Outcome::Stopped);
/// assert!(String::from_utf8(out).unwrap().contains("New string: heLLo\n"));
/// ```
pub struct Session {
    source: Box<dyn LineSource>,
    config: SessionConfig,
    pending: VecDeque<Symbol>,
}

impl Session {
    pub fn new(source: Box<dyn LineSource>, config: SessionConfig) -> Self {
        Self {
            source,
            config,
            pending: VecDeque::new(),
        }
    }

    /// Run iterations until the stop word is entered or input is exhausted.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Outcome> {
        loop {
            let Some(line) = self.source.read_line(STRING_PROMPT, out)? else {
                debug!("input ended while waiting for a string");
                return Ok(Outcome::EndOfInput);
            };
            if line == self.config.stop_word.as_bytes() {
                info!("stop word entered");
                return Ok(Outcome::Stopped);
            }
            self.source.remember(&line)?;

            let Some(from) = self.read_char(MATCH_PROMPT, out)? else {
                debug!("input ended while waiting for the character to replace");
                return Ok(Outcome::EndOfInput);
            };
            let Some(to) = self.read_char(REPLACEMENT_PROMPT, out)? else {
                debug!("input ended while waiting for the replacing character");
                return Ok(Outcome::EndOfInput);
            };
            self.pending.clear();

            let mut text = line;
            let count = replace_in_place(&mut text, from, to);
            debug!("replaced {count} occurrence(s) of {from:?} with {to:?}");

            out.write_all(b"New string: ")?;
            out.write_all(&text)?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }

    /// Next non-whitespace character, reading more lines when the current one runs dry.
    fn read_char(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<Symbol>> {
        if let Some(c) = self.next_token() {
            out.write_all(prompt.as_bytes())?;
            return Ok(Some(c));
        }

        let mut prompt = prompt;
        loop {
            let Some(line) = self.source.read_line(prompt, out)? else {
                return Ok(None);
            };
            self.pending = symbols(&line).collect();
            if let Some(c) = self.next_token() {
                return Ok(Some(c));
            }
            prompt = "";
        }
    }

    fn next_token(&mut self) -> Option<Symbol> {
        while let Some(symbol) = self.pending.pop_front() {
            if !symbol.is_space() {
                return Some(symbol);
            }
        }
        None
    }
}
