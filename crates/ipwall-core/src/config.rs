//! Startup configuration
//!
//! TOML-backed settings for seeding an engine at boot: the initial
//! enforcement flag and a blocklist of range texts. Everything here is
//! optional; the default is an empty blocklist with enforcement enabled.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::range::AddressRange;

/// Engine startup configuration.
///
/// ```toml
/// enabled = true
/// ranges = [
///     "5.0.0.0-5.0.0.255",
///     "203.0.113.0-203.0.113.255",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Whether enforcement starts enabled
    pub enabled: bool,

    /// Blocklist seeded at startup, one `"A.B.C.D-E.F.G.H"` text per entry
    pub ranges: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ranges: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every seed range parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for text in &self.ranges {
            text.parse::<AddressRange>()?;
        }
        Ok(())
    }
}
