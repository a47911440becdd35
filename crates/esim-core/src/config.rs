//! Application configuration
//!
//! Read from `config.json` in the platform config directory, then
//! overridden by command line flags in the desktop binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::presence::DEFAULT_HIDE_DELAY;

/// Upper bound for the exit animation delay
const MAX_HIDE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Delay before a hidden indicator or banner unmounts
    pub hide_delay_ms: u64,
    /// Whether to pulse the vibration motor
    pub haptics: bool,
    /// Catalog file replacing the bundled one
    pub catalog: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY.as_millis() as u64,
            haptics: true,
            catalog: None,
        }
    }
}

impl ShopConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("esim-shop")
            .join("config.json")
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> ShopResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let config: ShopConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShopResult<()> {
        if self.hide_delay_ms > MAX_HIDE_DELAY_MS {
            return Err(ShopError::Config(format!(
                "hide_delay_ms must be at most {}, got {}",
                MAX_HIDE_DELAY_MS, self.hide_delay_ms
            )));
        }
        Ok(())
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}
