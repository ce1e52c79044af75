use std::io;

use anyhow::Result;
use clap::Parser;

use bootcs_exercises::cli::MarioArgs;
use bootcs_exercises::logging::init_logging;
use bootcs_exercises::mario;

fn main() -> Result<()> {
    let args = MarioArgs::parse();

    init_logging(args.common.verbose)?;

    mario::run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
