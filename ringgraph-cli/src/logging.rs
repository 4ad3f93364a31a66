//! Structured logging for the `ringgraph` binary.
//!
//! Everything is written to stderr so the report on stdout can be piped.
//! `RUST_LOG` filters (default `info`) and `RINGGRAPH_LOG_FORMAT` picks
//! between `human` and `json` lines. Records from the `log` facade are
//! forwarded into `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "RINGGRAPH_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Line format written by the subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// One JSON object per line, carrying the span stack.
    Json,
}

impl LogFormat {
    /// Reads [`LOG_FORMAT_ENV`], defaulting to [`LogFormat::Human`] when unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not Unicode or names an
    /// unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source) => Err(LoggingError::UnreadableFormat { source }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat {
                provided: normalised,
            }),
        }
    }
}

/// Failures while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `RINGGRAPH_LOG_FORMAT` held bytes that are not valid Unicode.
    #[error("`RINGGRAPH_LOG_FORMAT` is not valid Unicode: {source}")]
    UnreadableFormat {
        /// Error from reading the variable.
        #[source]
        source: env::VarError,
    },
    /// `RINGGRAPH_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unknown log format `{provided}`; expected `human` or `json`")]
    UnknownFormat {
        /// Normalised value that was rejected.
        provided: String,
    },
}

/// Installs the global subscriber once and returns the format in use.
///
/// Later calls return the first format without touching the environment. If
/// another subscriber already owns the global slot it is left in place and
/// receives a debug event instead.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] cannot be used.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }
    let format = LogFormat::from_env()?;
    install(format);
    Ok(*INSTALLED.get_or_init(|| format))
}

fn install(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let lines = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let lines = match format {
        LogFormat::Human => lines.boxed(),
        LogFormat::Json => lines.json().with_current_span(true).with_span_list(true).boxed(),
    };

    // Fails only when a `log` logger is already set.
    let _ = LogTracer::init();

    if let Err(err) = tracing_subscriber::registry().with(filter).with(lines).try_init() {
        debug!(error = %err, ?format, "keeping existing tracing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("Human\n", LogFormat::Human)]
    #[case(" JSON ", LogFormat::Json)]
    fn known_formats_parse(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[rstest]
    #[case("XML", "xml")]
    #[case("", "")]
    #[case(" pretty ", "pretty")]
    fn unknown_formats_report_normalised_value(#[case] raw: &str, #[case] provided: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format must be rejected");
        assert!(matches!(&err, LoggingError::UnknownFormat { provided: p } if p == provided));
        assert!(err.to_string().contains("expected `human` or `json`"));
    }

    #[rstest]
    fn human_is_the_default() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[rstest]
    fn repeated_initialisation_keeps_the_first_format() {
        let first = init_logging().expect("logging must initialise");
        let second = init_logging().expect("later calls must succeed");
        assert_eq!(first, second);
    }
}
