//! # Logger
//!
//! Installs the process-wide `tracing` subscriber used by every `WordHub` binary.
//!
//! * Console output is compact and colored; it can be redirected to `stderr` so that
//!   command-line tools keep `stdout` for their own output.
//! * File output goes through a rolling, non-blocking appender and may be JSON.
//! * `RUST_LOG` always wins over the configured level; [`LoggerBuilder::env_filter`]
//!   sets a programmatic default such as `"whub_lookup=debug,tower_http=info"`.
//!
//! ## Example
//!
//! ```rust
//! use whub_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("whub-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Where console output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: Option<ConsoleTarget>,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl LoggerBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            console: Some(ConsoleTarget::Stdout),
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }

    /// Sets the minimum level emitted when `RUST_LOG` is not set.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Sets the minimum level from its textual form (`"trace"` .. `"error"`, `"off"`).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let level = LevelFilter::from_str(level).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{level}': {e}").into(),
            context: None,
        })?;
        Ok(self.level(level))
    }

    /// Adds an explicit env filter (e.g., `whub_lookup=debug,hyper=info`).
    ///
    /// `RUST_LOG` is ignored when an explicit filter is given; an invalid filter
    /// makes [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Selects the console target, or disables console output with `None`.
    pub const fn console(mut self, target: Option<ConsoleTarget>) -> Self {
        self.console = target;
        self
    }

    /// Enables rolling file output in the given directory.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Writes file output as JSON lines. Has no effect without [`LoggerBuilder::path`].
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Configures the log file rotation strategy.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Configures the maximum number of rotated files kept on disk.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the background writer of the file layer and
    /// must stay alive for as long as logs should be flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   an invalid env filter, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_env_filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::new();

        match self.console {
            Some(ConsoleTarget::Stdout) => layers.push(layer().compact().with_ansi(true).boxed()),
            Some(ConsoleTarget::Stderr) => layers.push(
                layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed(),
            ),
            None => {}
        }

        let guard = match &self.path {
            Some(path) => {
                let (file_layer, guard) = self.file_layer(path)?;
                layers.push(file_layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled; enable console or file output".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            }),
        }
    }

    fn file_layer(&self, path: &Path) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
        fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Failed to create path: {}", path.display()).into()),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation.clone())
            .filename_prefix(&self.name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(path)?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = layer().with_writer(writer).with_ansi(false);
        let boxed = if self.json { file_layer.json().boxed() } else { file_layer.boxed() };

        Ok((boxed, guard))
    }
}

/// A handle to the initialized logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// `name` prefixes rolling log files (e.g., `whub-server.2026-10-19.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name.into())
    }

    /// Returns whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
