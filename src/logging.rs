//! Diagnostics via `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so the recommendation report on stdout stays
//! clean. `RUST_LOG`, when set, replaces the configured level.
//!
//! - `warn`: rent-comp API fallback notice
//! - `info`: load counts, filter and ranking summaries
//! - `debug`: per-listing rent method, comp resolution, request URLs

use crate::cli::{LogFormatArg, LogLevelArg};
use std::io;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    EnvFilter,
};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_args(level: LogLevelArg, format: LogFormatArg) -> Self {
        let level = match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
        let format = match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        Self {
            level,
            format,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Installs the global subscriber writing to stderr. Call once.
pub fn init_logging(config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(build_subscriber(config, io::stderr))
}

/// The configured subscriber, not yet installed. Tests scope it with
/// `tracing::subscriber::with_default` to capture output.
pub fn build_subscriber<W>(config: &LogConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(writer).with_target(false);
            Box::new(tracing_subscriber::registry().with(filter).with(layer))
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            Box::new(tracing_subscriber::registry().with(filter).with(layer))
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            Box::new(tracing_subscriber::registry().with(filter).with(layer))
        }
    }
}

/// `RUST_LOG` wins; otherwise our crate logs at `level` and dependencies
/// stay at warn.
fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,house_hunter={level}")))
}
