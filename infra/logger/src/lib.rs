//! # Logger
//!
//! Structured logging for application startup.
//!
//! Installs one global `tracing` subscriber with a console layer (compact or JSON)
//! and an optional rolling, non-blocking file layer. Shells usually build it from
//! the `[logging]` section of the bootstrap config with [`Logger::from_config`].
//!
//! ## Example
//!
//! ```rust
//! # use ignite_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("ignite-shell")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use ignite_domain::config::LoggingConfig;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the file writer guard, if any. Drop it only on shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Installs the subscriber described by a [`LoggingConfig`].
    ///
    /// # Errors
    /// Fails on an unknown level name or for any reason [`LoggerBuilder::init`] fails.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let mut builder = Self::builder().name(name).level(level).json(config.json);
        if let Some(filter) = &config.env_filter {
            builder = builder.env_filter(filter.clone());
        }

        match &config.directory {
            Some(directory) => builder.path(directory).init(),
            None => builder.init(),
        }
    }

    pub(crate) const fn with_guard(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// Best-effort synchronization point before shutdown.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses `trace`, `debug`, `info`, `warn`, `error` or `off` (case-insensitive).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: Some("logging.level".into()),
    })
}
