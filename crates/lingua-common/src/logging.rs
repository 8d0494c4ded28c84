//! Structured logging infrastructure for Lingua

use crate::{LinguaError, Result};
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output with colors on a terminal
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = LinguaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LinguaError::config(format!("Unknown log format: {other}"))),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`lingua_i18n=trace`")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output; stderr when unset
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if the filter directive cannot be parsed, the log file cannot be
/// opened, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| LinguaError::config_with_source("Invalid log level filter", e))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let (writer, ansi) = match &config.file_path {
        Some(path) => (file_writer(Path::new(path))?, false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|e| LinguaError::config_with_source("Failed to install log subscriber", e))
}

/// Run `f` with a temporary compact stderr subscriber filtered by `level`.
///
/// Used for work that happens before the configured subscriber can be
/// installed, such as loading the configuration that describes it.
pub fn with_startup_logging<T>(level: &str, f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(subscriber, f)
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LinguaError::config(format!("Invalid log file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory)?;
    Ok(BoxMakeWriter::new(tracing_appender::rolling::never(
        directory, file_name,
    )))
}
