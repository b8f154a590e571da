//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer, an optional
//! non-blocking rolling file layer (plain or JSON), and an [`EnvFilter`] that honours
//! `RUST_LOG` on top of a programmatic default level.
//!
//! ```rust
//! use enlist_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("enlist-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

mod state {
    pub trait Sealed {}

    #[derive(Debug)]
    pub struct NoName;
    #[derive(Debug)]
    pub struct WithName(pub(crate) String);
    #[derive(Debug)]
    pub struct NoFile;
    #[derive(Debug)]
    pub struct WithFile;

    impl Sealed for NoName {}
    impl Sealed for WithName {}
    impl Sealed for NoFile {}
    impl Sealed for WithFile {}
}

pub use state::{NoFile, NoName, WithFile, WithName};

/// Type-state builder: a name is required before `init`, file-only knobs need a path.
#[derive(Debug)]
#[must_use = "the builder does nothing until .init() is called"]
pub struct LoggerBuilder<N: state::Sealed = NoName, F: state::Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: state::Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; the name also prefixes rolled log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl<F: state::Sealed> LoggerBuilder<WithName, F> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `enlist_registration=debug,surrealdb=warn`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes logs into `path` in addition to (or instead of) the console.
    pub fn path(mut self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        self.config.path = Some(path.into());
        LoggerBuilder { config: self.config, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process; dropping it
    /// stops the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   unparsable filter directives, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the rolling file cannot be opened.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name), .. } = self;
        validate(&config, &name)?;

        let filter = env_filter(&config)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &config.path {
            Some(path) => {
                let (file_layer, guard) = file_layer(&config, &name, path)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<WithName, WithFile> {
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Emits the file output as JSON lines.
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

/// Handle to the installed logging system.
#[must_use = "dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file: PhantomData }
    }

    /// The file writer guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        Some("Logger name cannot be empty")
    } else if config.max_files == 0 {
        Some("max_files must be greater than zero")
    } else if !config.console && config.path.is_none() {
        Some("No logging output enabled; enable the console or set a path")
    } else {
        None
    };

    problem.map_or(Ok(()), |message| {
        Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
    })
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
    }
}

fn file_layer(
    config: &LoggerConfig,
    name: &str,
    path: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", path.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(path)
        .context("Building rolling file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = layer().with_writer(writer).with_ansi(false);
    let boxed = if config.json { layer.json().boxed() } else { layer.boxed() };

    Ok((boxed, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn builder_starts_with_console_at_info() {
        let builder = Logger::builder().name("enlist-test").env_filter("enlist=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("enlist=debug"));
        assert!(builder.config.path.is_none());
    }

    #[test]
    #[serial]
    fn file_settings_are_recorded() {
        let builder = Logger::builder()
            .name("enlist-test")
            .path("/tmp/enlist-logs")
            .max_files(3)
            .rotation(Rotation::HOURLY)
            .json();

        assert_eq!(builder.config.max_files, 3);
        assert!(builder.config.json);
        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("/tmp/enlist-logs")));
    }

    #[test]
    #[serial]
    fn invalid_settings_are_rejected() {
        let blank = Logger::builder().name("   ").init().unwrap_err();
        assert!(matches!(blank, LoggerError::InvalidConfiguration { .. }));

        let zero = Logger::builder().name("enlist-test").path("/tmp/x").max_files(0).init();
        assert!(matches!(zero, Err(LoggerError::InvalidConfiguration { .. })));

        let filter = Logger::builder().name("enlist-test").env_filter("enlist=loudest").init();
        assert!(matches!(filter, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
