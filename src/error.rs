use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum ExerciseError {
    InputClosed {
        prompt: String,
        attempts: usize,
    },
    IoError {
        operation: String,
        source: std::io::Error,
    },
}

impl ExerciseError {
    pub fn input_closed(prompt: impl Into<String>, attempts: usize) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
            attempts,
        }
    }

    pub fn io_error(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            source,
        }
    }
}

impl fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed { prompt, attempts } => {
                writeln!(
                    f,
                    "{} Input closed before a valid value was entered",
                    "✗".red().bold()
                )?;
                writeln!(f, "  {} Prompt: {}", "→".blue(), prompt.trim_end().yellow())?;
                writeln!(f, "  {} Attempts: {}", "→".blue(), attempts)?;
                Ok(())
            }
            Self::IoError { operation, source } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
        }
    }
}

impl std::error::Error for ExerciseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
