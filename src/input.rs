use crate::error::Result;
use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Anything that can show a prompt and hand back one line of user input.
///
/// Implementors decide where the prompt goes: [`StreamSource`] writes it to
/// the session output, [`Terminal`] lets the line editor draw it.
pub trait LineSource {
    /// Show `prompt` and read the next line without its trailing newline.
    ///
    /// The line is returned as raw bytes; nothing is decoded or replaced.
    /// Returns `Ok(None)` once no more input can be read.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<Vec<u8>>>;

    /// Offer a line the user entered for later recall.
    fn remember(&mut self, _line: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Line source over any buffered reader, e.g. piped stdin or a `Cursor`.
pub struct StreamSource<R> {
    reader: R,
}

impl<R: BufRead> StreamSource<R> {
    /// Create a source that will read lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<Vec<u8>>> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// Interactive line source backed by `rustyline`, with in-memory history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    /// Set up the line editor on the controlling terminal.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<Vec<u8>>> {
        // Anything the session printed must land before the editor redraws.
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.into_bytes())),
            Err(ReadlineError::Interrupted) => {
                info!("interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &[u8]) -> Result<()> {
        // Editor lines are always UTF-8, so nothing is lost here.
        self.editor.add_history_entry(String::from_utf8_lossy(line))?;
        Ok(())
    }
}
