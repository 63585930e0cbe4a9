//! Diagnostic logging setup
//!
//! Logs go to stderr, or to a file when one is configured. `RUST_LOG` takes
//! precedence over the configured level.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Level to use while the full-screen UI owns the terminal
///
/// Without a log file anything written to stderr would land on the
/// alternate screen, so logging is switched off.
#[must_use]
pub fn tui_level<'a>(level: &'a str, log_file: Option<&Path>) -> &'a str {
    if log_file.is_some() { level } else { "off" }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(level: &str, log_file: Option<&Path>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        None => {
            builder.with_writer(io::stderr).try_init().ok();
        }
    }

    tracing::debug!(filter = level, "logging initialised");
    Ok(())
}
