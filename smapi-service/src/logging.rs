//! Logging setup for the music service
//!
//! The core only emits `tracing` events. Hosts embedding it pick how those
//! events are rendered by calling one of the initializers here once at
//! startup.

use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::ServiceConfig;

/// How log events are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    /// No subscriber installed
    #[default]
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose output with source locations
    Debug,
    /// One JSON object per line, for log shippers
    Json,
}

impl FromStr for LoggingMode {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(LoggingMode::Silent),
            "development" | "dev" => Ok(LoggingMode::Development),
            "debug" => Ok(LoggingMode::Debug),
            "json" => Ok(LoggingMode::Json),
            other => Err(LoggingError::InvalidEnv(format!("unknown logging mode '{}'", other))),
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid environment variable: {0}")]
    InvalidEnv(String),
}

/// Install a global subscriber for `mode`.
///
/// # Environment Variables
///
/// - `SMAPI_LOG_LEVEL`: filter directive (error, warn, info, debug, trace or
///   a full `EnvFilter` expression such as `smapi_service::identity=debug`)
/// - `RUST_LOG`: used when `SMAPI_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(fmt::layer().with_target(false).compact())
            .with(create_env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(create_env_filter("debug"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Json => Registry::default()
            .with(fmt::layer().json().with_current_span(false))
            .with(create_env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Initialize logging from `SMAPI_LOG_MODE` (silent, development, debug, json).
///
/// Defaults to silent when the variable is unset.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("SMAPI_LOG_MODE") {
        Ok(value) => value.parse()?,
        Err(_) => LoggingMode::Silent,
    };

    init_logging(mode)
}

/// Install the subscriber selected by `config.log_mode`.
///
/// Does nothing when a global subscriber is already installed, so hosts
/// building several services from one config can call it for each.
pub fn init_service_logging(config: &ServiceConfig) -> Result<(), LoggingError> {
    if config.log_mode == LoggingMode::Silent || is_initialized() {
        return Ok(());
    }
    init_logging(config.log_mode)?;
    tracing::info!(service = %config.service_name, mode = ?config.log_mode, "Logging initialized");
    Ok(())
}

fn create_env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("SMAPI_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
