pub mod cash;
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod mario;
pub mod prompt;

pub use error::{ExerciseError, Result};
