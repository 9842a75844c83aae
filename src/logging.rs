//! `tracing` subscriber setup shared by the binaries. Level comes from
//! `RUST_LOG`, defaulting to `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr. Fails if a global subscriber is already installed.
pub fn init_stderr() -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Log to a file, for the terminal UI where stderr would garble the screen.
pub fn init_file(path: &Path) -> Result<(), LoggingError> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
