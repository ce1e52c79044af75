use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging on stderr based on verbosity level
///
/// Stdout is reserved for prompts and program output.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bootcs_exercises=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log an input line that could not be read as an integer
pub fn log_unparsable_input(prompt: &str, input: &str) {
    tracing::warn!(
        prompt = prompt.trim_end(),
        input = input,
        "Input is not a whole number, asking again"
    );
}

/// Log an integer that failed the program's range check
pub fn log_rejected_value(prompt: &str, value: i64, reason: &str) {
    tracing::debug!(
        prompt = prompt.trim_end(),
        value = value,
        reason = reason,
        "Value rejected, asking again"
    );
}

/// Log the value a prompt finally accepted
pub fn log_accepted_value(prompt: &str, value: i64, attempts: usize) {
    tracing::debug!(
        prompt = prompt.trim_end(),
        value = value,
        attempts = attempts,
        "Value accepted"
    );
}

/// Log the coin count produced for an amount
pub fn log_change_counted(cents: u64, coins: u64) {
    tracing::info!(cents = cents, coins = coins, "Change counted");
}

/// Log a printed pyramid
pub fn log_pyramid_printed(height: u8) {
    tracing::info!(height = height, "Pyramid printed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        // Another test may have installed the global subscriber first
        let _ = init_logging(false);

        let err = init_logging(true).unwrap_err();
        assert!(err.to_string().contains("Failed to initialize logging"));
    }

    #[test]
    fn test_logging_functions() {
        log_unparsable_input("Height: ", "abc");
        log_rejected_value("Height: ", 9, "out of range");
        log_accepted_value("Change owed: ", 41, 2);
        log_change_counted(41, 4);
        log_pyramid_printed(3);
    }
}
