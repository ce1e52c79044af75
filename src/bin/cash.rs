use std::io;

use anyhow::Result;
use clap::Parser;

use bootcs_exercises::cash;
use bootcs_exercises::cli::CashArgs;
use bootcs_exercises::logging::init_logging;

fn main() -> Result<()> {
    let args = CashArgs::parse();

    init_logging(args.common.verbose)?;

    let breakdown = cash::run(io::stdin().lock(), io::stdout().lock())?;

    if args.breakdown {
        cash::write_breakdown(io::stderr().lock(), &breakdown)?;
    }

    Ok(())
}
