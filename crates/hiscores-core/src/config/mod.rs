//! Configuration for the Hiscores client.
//!
//! This module contains:
//! - `HiscoresConfig` - endpoints, timing thresholds and user agent, loadable from TOML
//! - `Endpoints` - the two upstream leaderboard URLs
//! - Default and retry constants

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in defaults.
pub mod defaults {
    /// Standard leaderboard endpoint.
    pub const STANDARD_ENDPOINT: &str =
        "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws";

    /// Ironman leaderboard endpoint.
    pub const IRONMAN_ENDPOINT: &str =
        "https://secure.runescape.com/m=hiscore_oldschool_ironman/index_lite.ws";

    /// Responses slower than this are logged as a warning.
    pub const WARN_SECS: u64 = 10;

    /// Hard limit on a single request.
    pub const TIMEOUT_SECS: f64 = 60.0;

    pub const USER_AGENT: &str = concat!("hiscores/", env!("CARGO_PKG_VERSION"));
}

/// Caller-side retry configuration for outage errors.
///
/// Exponential backoff: 2s → 4s → 8s → 16s → 32s = total ~62s max.
/// The upstream maintenance window is usually minutes, so short delays are pointless.
pub mod retry {
    /// Maximum number of attempts, including the first.
    pub const MAX_ATTEMPTS: u32 = 5;

    /// Delay (in ms) after each failed attempt.
    pub const RETRY_DELAYS_MS: [u64; 5] = [2_000, 4_000, 8_000, 16_000, 32_000];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub standard: String,
    pub ironman: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            standard: defaults::STANDARD_ENDPOINT.to_string(),
            ironman: defaults::IRONMAN_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiscoresConfig {
    pub endpoints: Endpoints,
    /// Slow-response warning threshold in seconds
    pub warn_secs: u64,
    /// Request timeout in seconds
    pub timeout_secs: f64,
    pub user_agent: String,
}

impl Default for HiscoresConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            warn_secs: defaults::WARN_SECS,
            timeout_secs: defaults::TIMEOUT_SECS,
            user_agent: defaults::USER_AGENT.to_string(),
        }
    }
}

impl HiscoresConfig {
    /// Load a TOML config file. Keys that are absent keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        self.timeout()?;
        for url in [&self.endpoints.standard, &self.endpoints.ironman] {
            url::Url::parse(url)
                .map_err(|e| Error::ConfigParseError(format!("invalid endpoint '{}': {}", url, e)))?;
        }
        Ok(())
    }

    pub fn with_warn_secs(mut self, secs: u64) -> Self {
        self.warn_secs = secs;
        self
    }

    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn warn_after(&self) -> Duration {
        Duration::from_secs(self.warn_secs)
    }

    /// Request timeout. Fails unless `timeout_secs` is positive and fits a `Duration`.
    pub fn timeout(&self) -> Result<Duration> {
        let invalid = || {
            Error::ConfigParseError(format!(
                "timeout_secs must be a positive number of seconds, got {}",
                self.timeout_secs
            ))
        };
        if self.timeout_secs <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(self.timeout_secs).map_err(|_| invalid())
    }
}
