//! Disambiguation between candidate names.
//!
//! When more than one entry or dataset group could be read, the resolvers
//! hand the candidates to a [`Selector`]. The terminal implementation,
//! [`PromptSelector`], asks the operator for an index and keeps asking until
//! the answer is valid. Headless callers plug in [`FixedSelector`],
//! [`HeadlessSelector`] or any closure instead.

use crate::error::{Result, ToolboxError};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Something that picks one name out of several.
pub trait Selector {
    /// Present `candidates` and return the chosen one.
    ///
    /// Only called with two or more candidates.
    fn select(&mut self, candidates: &[String]) -> Result<String>;
}

impl<F> Selector for F
where
    F: FnMut(&[String]) -> Result<String>,
{
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        self(candidates)
    }
}

/// Operator input that does not name a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InvalidSelection {
    input: String,
    count: usize,
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid input \"{}\", please enter a number between 0 and {}.",
            self.input,
            self.count.saturating_sub(1)
        )
    }
}

fn parse_selection(input: &str, count: usize) -> std::result::Result<usize, InvalidSelection> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(index) if index < count => Ok(index),
        _ => Err(InvalidSelection {
            input: trimmed.to_string(),
            count,
        }),
    }
}

/// Line-oriented prompt over a reader/writer pair.
#[derive(Debug)]
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl PromptSelector<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    /// Create a prompt reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the selector, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        loop {
            writeln!(self.output, "Please select one of the following:")?;
            for (i, candidate) in candidates.iter().enumerate() {
                writeln!(self.output, "{}: {}", i, candidate)?;
            }
            write!(self.output, "Enter the number of your selection: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ToolboxError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a selection was made",
                )));
            }

            match parse_selection(&line, candidates.len()) {
                Ok(index) => return Ok(candidates[index].clone()),
                Err(invalid) => {
                    tracing::debug!("Rejected selection input {:?}", invalid.input);
                    writeln!(self.output, "{}", invalid)?;
                }
            }
        }
    }
}

/// Always picks the candidate at a fixed index.
///
/// An index past the end picks the last candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector {
    index: usize,
}

impl FixedSelector {
    /// Create a selector that always answers `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Selector for FixedSelector {
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        let index = self.index.min(candidates.len().saturating_sub(1));
        candidates
            .get(index)
            .cloned()
            .ok_or_else(|| ToolboxError::SelectionUnavailable {
                candidates: Vec::new(),
            })
    }
}

/// Refuses every selection, for runs without an operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSelector;

impl Selector for HeadlessSelector {
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        Err(ToolboxError::SelectionUnavailable {
            candidates: candidates.to_vec(),
        })
    }
}
