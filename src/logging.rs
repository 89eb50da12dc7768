//! Structured logging setup
//!
//! The router itself only emits `tracing` events; installing a subscriber is
//! left to the host. [`init_logging`] is the stock way to do it:
//!
//! ```rust,no_run
//! use simple_router::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from_env())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::env;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Extra filter directives (comma-separated, e.g. `simple_router=debug`)
    pub target_filter: Option<String>,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    ///
    /// - `ROUTER_LOG_LEVEL` (default `info`)
    /// - `ROUTER_LOG_FORMAT` (`json` or `pretty`, default `json`)
    /// - `ROUTER_LOG_TARGET_FILTER`
    /// - `ROUTER_LOG_INCLUDE_LOCATION` (default `false`)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("ROUTER_LOG_LEVEL").unwrap_or(defaults.level),
            format: env::var("ROUTER_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            target_filter: env::var("ROUTER_LOG_TARGET_FILTER").ok(),
            include_location: env::var("ROUTER_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
        }
    }

    /// Filter directives: the level, then any target filter
    #[must_use]
    pub fn directives(&self) -> String {
        match &self.target_filter {
            Some(filter) if !filter.is_empty() => format!("{},{}", self.level, filter),
            _ => self.level.clone(),
        }
    }

    /// Build the `EnvFilter` for these settings
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let directives = self.directives();
        EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid log filter directives '{directives}'"))
    }
}

/// Install the global `tracing` subscriber
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
