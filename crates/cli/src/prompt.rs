//! Line prompts for interactive sessions.

use console::{style, Term};
use std::io::{self, BufRead, StdinLock, Write};

/// Asks questions on `output` and reads answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Term> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), Term::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a line of text.
    ///
    /// Returns `None` at end of input or when the answer is blank.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", style(question).bold().cyan())?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Ask a yes/no question. Anything but `y` or `yes` is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} {} ", style(question).bold().cyan(), style("[y/N]").dim())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
