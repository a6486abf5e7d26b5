//! Logging initialisation for the graphkit CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, human-readable
//! or JSON, and bridges the `log` facade into it.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "GRAPHKIT_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines.
    #[default]
    Human,
    /// One JSON object per event, including the span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `GRAPHKIT_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs global structured logging once per process.
///
/// `GRAPHKIT_LOG_FORMAT` picks `human` (default) or `json`; `RUST_LOG` sets
/// the filter, defaulting to `info`. Output goes to stderr so stdout carries
/// only command results. A subscriber installed by someone else is kept.
///
/// # Errors
/// Returns [`LoggingError`] when the format variable is not Unicode or names
/// an unknown format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = read_format()?;
    match install_subscriber(format) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => report_existing_subscriber(&source),
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_failure_message(source: &TryInitError) -> String {
    format!("structured logging already configured elsewhere: {source}")
}

#[expect(
    clippy::print_stderr,
    reason = "The global subscriber is owned elsewhere, so tracing cannot carry this notice"
)]
fn report_existing_subscriber(source: &TryInitError) {
    eprintln!("{}", install_failure_message(source));
}

fn read_format() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
