//! Runtime configuration.
//!
//! Defaults, overridden by a JSON file, overridden by `CARDFORGE_*`
//! environment variables. Binaries apply their command-line flags last.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::layout::DEFAULT_BREAKPOINT;

pub const ENV_SERVER: &str = "CARDFORGE_SERVER";
pub const ENV_TIMEOUT_SECS: &str = "CARDFORGE_TIMEOUT_SECS";
pub const ENV_BREAKPOINT: &str = "CARDFORGE_BREAKPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Base URL of the card server; `/create_card` is appended
    pub server_url: String,
    /// Request timeout for submissions
    pub timeout_secs: u64,
    /// Layout breakpoint in logical pixels
    pub breakpoint: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl CardConfig {
    /// `<config_dir>/cardforge/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cardforge").join("config.json"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// only if present.
    pub fn load(path: Option<&Path>) -> CardResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CardError::Config(format!("{}: {}", path.display(), e)))?;
        let config = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`CardConfig::load`]).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> CardResult<()> {
        if let Some(server) = lookup(ENV_SERVER) {
            self.server_url = server;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw
                .parse()
                .map_err(|_| CardError::Config(format!("{}={} is not a number", ENV_TIMEOUT_SECS, raw)))?;
        }
        if let Some(raw) = lookup(ENV_BREAKPOINT) {
            self.breakpoint = raw
                .parse()
                .map_err(|_| CardError::Config(format!("{}={} is not a number", ENV_BREAKPOINT, raw)))?;
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the card creation endpoint.
    pub fn create_card_url(&self) -> String {
        format!("{}/create_card", self.server_url.trim_end_matches('/'))
    }
}
