//! The change counter program

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::core::change::{make_change, validate_change_owed, CoinBreakdown};
use crate::error::{ExerciseError, Result};
use crate::logging;
use crate::prompt::Prompter;

pub const PROMPT: &str = "Change owed: ";

/// Asks for the change owed, then writes the minimum coin count as one line
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<CoinBreakdown> {
    let mut prompter = Prompter::new(input, output);
    let cents = prompter.ask_until(PROMPT, validate_change_owed)?;

    let breakdown = make_change(cents);
    logging::log_change_counted(cents, breakdown.total());

    let mut output = prompter.into_output();
    writeln!(output, "{}", breakdown.total())
        .and_then(|_| output.flush())
        .map_err(|e| ExerciseError::io_error("writing coin count", e))?;

    Ok(breakdown)
}

/// Writes a per-denomination table for a breakdown
pub fn write_breakdown<W: Write>(mut out: W, breakdown: &CoinBreakdown) -> Result<()> {
    write_table(&mut out, breakdown)
        .map_err(|e| ExerciseError::io_error("writing coin breakdown", e))
}

fn write_table<W: Write>(out: &mut W, breakdown: &CoinBreakdown) -> std::io::Result<()> {
    writeln!(out, "{}", "Coins used:".green().bold())?;
    for (coin, count) in breakdown.iter() {
        writeln!(out, "  {} {:<14} x {}", "•".blue(), coin.to_string(), count)?;
    }
    writeln!(
        out,
        "  {} {} coins for {}c",
        "→".blue(),
        breakdown.total(),
        breakdown.value()
    )?;
    out.flush()
}
