//! Configuration management for MerakiOp
//!
//! The config file is optional. When no `--config` path is given and
//! `~/.merakiop/config.yaml` does not exist, built-in defaults are used.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Meraki Dashboard API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v0";

/// Environment variable holding the API key in `--key-source env` mode
pub const DEFAULT_API_KEY_ENV: &str = "MERAKI_DASHBOARD_API_KEY";

/// Time zone applied to newly created networks.
///
/// Uses the `TZ` column names of the tz database.
pub const DEFAULT_TIME_ZONE: &str = "Australia/NSW";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Dashboard API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Time zone for created networks
    #[serde(default = "default_time_zone")]
    pub default_time_zone: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Client-side request rate limit
    #[serde(default = "default_rate_limit_per_second")]
    pub rate_limit_per_second: u32,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

// The Dashboard API allows 10 calls per second per organization.
fn default_rate_limit_per_second() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            default_time_zone: default_time_zone(),
            request_timeout_secs: default_request_timeout_secs(),
            rate_limit_per_second: default_rate_limit_per_second(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".merakiop").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(PathBuf::from(path))?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)?
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply a base URL override from the command line or environment
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid("api_key_env can't be empty".to_string()).into());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            ))
            .into());
        }
        if self.default_time_zone.trim().is_empty() {
            return Err(
                ConfigError::Invalid("default_time_zone can't be empty".to_string()).into(),
            );
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            )
            .into());
        }
        if self.rate_limit_per_second == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit_per_second must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
