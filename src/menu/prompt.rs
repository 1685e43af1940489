//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::LedgerResult;

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a prompt and read one trimmed line; None at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as an
    /// I/O error, so a stray byte is just an invalid answer.
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Ask a yes/no question; anything but "y"/"yes" (or EOF) is "no"
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        let answer = self.ask(prompt)?.unwrap_or_default().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Write text followed by a newline
    pub fn say(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Write preformatted text as-is
    pub fn print(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
