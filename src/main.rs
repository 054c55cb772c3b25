//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout.

use anyhow::Result;
use contact_book::{Config, FixedClock, Shell, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for command output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let result = match config.today {
        Some(today) => {
            info!("Using pinned date {} for birthday queries", today);
            Shell::new(FixedClock(today), config.prompt).run(stdin, stdout)
        }
        None => Shell::new(SystemClock, config.prompt).run(stdin, stdout),
    };

    if let Err(e) = &result {
        error!("Command loop failed: {}", e);
    }
    result?;

    info!("Contact book shutdown complete");
    Ok(())
}
