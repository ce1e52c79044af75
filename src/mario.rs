//! The pyramid printer program

use std::io::{BufRead, Write};

use crate::core::pyramid::{rows, Height};
use crate::error::{ExerciseError, Result};
use crate::logging;
use crate::prompt::Prompter;

pub const PROMPT: &str = "Height: ";

/// Asks for a height in 1..=8, then writes the pyramid row by row
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<Height> {
    let mut prompter = Prompter::new(input, output);
    let height = prompter.ask_until(PROMPT, Height::new)?;

    let mut output = prompter.into_output();
    for row in rows(height) {
        writeln!(output, "{row}").map_err(|e| ExerciseError::io_error("writing pyramid", e))?;
    }
    output
        .flush()
        .map_err(|e| ExerciseError::io_error("writing pyramid", e))?;

    logging::log_pyramid_printed(height.get());
    Ok(height)
}
