//! Line-based prompting over any reader/writer pair.
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::render;

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer<T> {
    Value(T),
    /// Empty line.
    Blank,
    /// Text that did not parse.
    Invalid(String),
    /// Input stream ended.
    Closed,
}

/// Outcome of an optional edit prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit<T> {
    /// Blank line; the current value stays.
    Keep,
    Set(T),
    /// Rejected input (already reported) or end of input.
    Abort,
}

impl<T> Edit<T> {
    /// `None` when the edit was aborted, otherwise the optional new value.
    pub fn accepted(self) -> Option<Option<T>> {
        match self {
            Self::Keep => Some(None),
            Self::Set(value) => Some(Some(value)),
            Self::Abort => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// True once the input stream has reached end of file.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn ask_with<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Answer<T>> {
        Ok(match self.read_line(prompt)? {
            None => Answer::Closed,
            Some(line) if line.is_empty() => Answer::Blank,
            Some(line) => parse(&line).map_or(Answer::Invalid(line), Answer::Value),
        })
    }

    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<T>> {
        self.ask_with(prompt, |s| s.parse().ok())
    }

    /// Prompt for a value that must be present and valid; failures are
    /// reported inline and yield `None`.
    pub fn require<T: FromStr>(&mut self, prompt: &str, what: &str) -> io::Result<Option<T>> {
        let answer = self.ask(prompt)?;
        self.required(answer, what)
    }

    /// Like [`Self::require`] with a custom parser.
    pub fn require_with<T>(
        &mut self,
        prompt: &str,
        what: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let answer = self.ask_with(prompt, parse)?;
        self.required(answer, what)
    }

    fn required<T>(&mut self, answer: Answer<T>, what: &str) -> io::Result<Option<T>> {
        match answer {
            Answer::Value(value) => Ok(Some(value)),
            Answer::Blank => {
                self.error(&format!("{what} is required."))?;
                Ok(None)
            }
            Answer::Invalid(text) => {
                self.error(&format!("Invalid {what}: '{text}'."))?;
                Ok(None)
            }
            Answer::Closed => Ok(None),
        }
    }

    /// Prompt for an optional change: blank keeps the current value.
    pub fn change<T: FromStr>(&mut self, prompt: &str, what: &str) -> io::Result<Edit<T>> {
        let answer = self.ask(prompt)?;
        self.changed(answer, what)
    }

    pub fn change_with<T>(
        &mut self,
        prompt: &str,
        what: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Edit<T>> {
        let answer = self.ask_with(prompt, parse)?;
        self.changed(answer, what)
    }

    fn changed<T>(&mut self, answer: Answer<T>, what: &str) -> io::Result<Edit<T>> {
        match answer {
            Answer::Value(value) => Ok(Edit::Set(value)),
            Answer::Blank => Ok(Edit::Keep),
            Answer::Invalid(text) => {
                self.error(&format!("Invalid {what}: '{text}'."))?;
                Ok(Edit::Abort)
            }
            Answer::Closed => Ok(Edit::Abort),
        }
    }

    /// Yes/no confirmation; anything but `y`/`yes` is a no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .read_line(&format!("{prompt} (y/n): "))?
            .is_some_and(|line| parse_yes_no(&line) == Some(true)))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format!("✓ {text}").green())
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format!("✗ {text}").red())
    }

    pub fn title(&mut self, text: &str) -> io::Result<()> {
        render::heading(&mut self.output, text)
    }
}

/// `y`/`yes` and `n`/`no`, any case.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
