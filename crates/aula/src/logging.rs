//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise [`DEFAULT_FILTER`] applies.

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,aula=debug";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_console() {
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to `path` so the terminal UI owns the screen.
///
/// # Errors
///
/// Fails if the log file cannot be created.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
