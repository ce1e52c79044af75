//! Interactive integer prompt shared by both exercises
//!
//! A prompt is written without a trailing newline, one line of input is read,
//! and the loop repeats until the caller's acceptance check passes. Lines that
//! are not a whole decimal integer are treated like rejected values.

use std::io::{BufRead, Write};

use crate::error::{ExerciseError, Result};
use crate::logging;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            attempts: 0,
        }
    }

    /// Prompts with `label` until `accept` returns `Ok` for the parsed integer
    ///
    /// Fails with [`ExerciseError::InputClosed`] if input ends first.
    pub fn ask_until<T, F>(&mut self, label: &str, accept: F) -> Result<T>
    where
        F: Fn(i64) -> std::result::Result<T, String>,
    {
        loop {
            self.attempts += 1;

            write!(self.output, "{label}")
                .and_then(|_| self.output.flush())
                .map_err(|e| ExerciseError::io_error("writing prompt", e))?;

            let mut line = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut line)
                .map_err(|e| ExerciseError::io_error("reading input", e))?;

            if read == 0 {
                return Err(ExerciseError::input_closed(label, self.attempts));
            }

            // Lines that are not UTF-8 are just another kind of non-numeric input
            let Some(value) = std::str::from_utf8(&line).ok().and_then(parse_integer) else {
                logging::log_unparsable_input(label, String::from_utf8_lossy(&line).trim());
                continue;
            };

            match accept(value) {
                Ok(accepted) => {
                    logging::log_accepted_value(label, value, self.attempts);
                    return Ok(accepted);
                }
                Err(reason) => logging::log_rejected_value(label, value, &reason),
            }
        }
    }

    /// Number of prompts written so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a whole line as a decimal integer with an optional sign
pub fn parse_integer(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}
