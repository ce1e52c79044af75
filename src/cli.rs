//! Command-line arguments for the exercise binaries
//!
//! Both programs are interactive and run fine with no arguments at all.

use clap::{Args, Parser};

#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "cash")]
#[command(version = "0.1.0")]
#[command(about = "Counts the fewest US coins needed to hand back change", long_about = None)]
pub struct CashArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long, help = "Print the coins used per denomination to stderr")]
    pub breakdown: bool,
}

#[derive(Parser, Debug)]
#[command(name = "mario")]
#[command(version = "0.1.0")]
#[command(about = "Prints a right-aligned pyramid of hashes", long_about = None)]
pub struct MarioArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
