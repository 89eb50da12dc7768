//! # Runtime Configuration Module
//!
//! Configuration for the router's runtime behavior, loaded from environment
//! variables or a TOML document.
//!
//! ## Environment Variables
//!
//! ### `ROUTER_SLOW_MATCH_US`
//!
//! Route matching slower than this many microseconds is logged at `warn`
//! ("Slow route matching detected") instead of `info`. Accepts:
//! - Decimal: `1000`
//! - Hexadecimal: `0x3e8`
//!
//! Default: `1000` (1 ms)
//!
//! The `ROUTER_LOG_*` variables are read by [`LogConfig::from_env`].
//!
//! ## TOML
//!
//! Every key is optional:
//!
//! ```toml
//! slow_match_us = 250
//!
//! [logging]
//! level = "debug"
//! format = "pretty"
//! target_filter = "simple_router=trace"
//! include_location = true
//! ```

use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logging::LogConfig;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Threshold above which a route match is reported as slow, in microseconds
    pub slow_match_us: u64,
    /// Subscriber settings
    ///
    /// The router does not install a subscriber itself; pass this to
    /// [`crate::logging::init_logging`], typically as
    /// `init_logging(&router.config().logging)`.
    pub logging: LogConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            slow_match_us: DEFAULT_SLOW_MATCH_US,
            logging: LogConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let slow_match_us = match env::var("ROUTER_SLOW_MATCH_US") {
            Ok(val) => parse_micros(&val).unwrap_or(DEFAULT_SLOW_MATCH_US),
            Err(_) => DEFAULT_SLOW_MATCH_US,
        };
        RouterConfig {
            slow_match_us,
            logging: LogConfig::from_env(),
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("failed to parse router configuration")
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read router configuration {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("invalid router configuration in {}", path.display()))
    }

    #[must_use]
    pub fn slow_match_threshold(&self) -> Duration {
        Duration::from_micros(self.slow_match_us)
    }
}

fn parse_micros(val: &str) -> Option<u64> {
    match val.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
