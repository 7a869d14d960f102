//! Log subscriber setup. Call sites use `tracing` macros; this module decides
//! where the events go.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file, no ANSI colours.
    File(PathBuf),
    Stderr,
    /// Nothing is installed; events are dropped.
    Disabled,
}

impl LogSink {
    /// A configured file always wins. Otherwise only headless runs log, to
    /// stderr, since the terminal UI owns the screen.
    pub fn select(config: &LoggingConfig, headless: bool) -> Self {
        match (&config.file, headless) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Disabled,
        }
    }
}

/// `RUST_LOG` if set and valid, else the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    parse_filter(env.as_deref(), level)
}

/// `env` wins when it parses; otherwise `level` must.
fn parse_filter(env: Option<&str>, level: &str) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level.to_ascii_lowercase()).map_err(|e| LoggingError::InvalidFilter {
        filter: level.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber for `sink`.
pub fn init(config: &LoggingConfig, sink: &LogSink) -> Result<(), LoggingError> {
    if *sink == LogSink::Disabled {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_target(false);

    let installed = match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::FileOpen {
                    path: path.clone(),
                    source: e,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        _ => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
