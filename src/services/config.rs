//! Layered configuration for the status-bar plugin
//!
//! Settings are read from a TOML file, then the environment, then command
//! line flags, each layer overriding the previous one. The merged settings
//! are validated into an immutable [`Config`] that is passed explicitly to
//! the search client and the aggregator.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::github::client::DEFAULT_REQUEST_TIMEOUT;

pub const APP_DIR_NAME: &str = "github-pr-bar";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_ACCESS_TOKEN: &str = "GITHUB_PR_BAR_ACCESS_TOKEN";
/// Consulted when [`ENV_ACCESS_TOKEN`] is unset
pub const ENV_FALLBACK_ACCESS_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_LOGIN: &str = "GITHUB_PR_BAR_LOGIN";
pub const ENV_WIP_LABEL: &str = "GITHUB_PR_BAR_WIP_LABEL";
pub const ENV_FILTERS: &str = "GITHUB_PR_BAR_FILTERS";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token or login absent or empty; no query may run
    Missing { fields: Vec<&'static str> },
    /// Config file exists but could not be read
    IoError(String),
    /// Config file is not valid TOML for [`Settings`]
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { fields } => {
                write!(f, "Missing required configuration: {}", fields.join(", "))
            }
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
            Self::ParseError(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One layer of optional settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub access_token: Option<String>,
    pub github_login: Option<String>,
    /// PRs carrying this label are grayed out
    pub wip_label: Option<String>,
    /// Extra search qualifiers appended to every query, e.g. `org:acme -label:dropped`
    pub filters: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub api_base_uri: Option<String>,
}

impl Settings {
    /// Reads settings from a TOML file. A missing file yields empty settings.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Reads settings from the process environment
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            access_token: lookup(ENV_ACCESS_TOKEN).or_else(|| lookup(ENV_FALLBACK_ACCESS_TOKEN)),
            github_login: lookup(ENV_GITHUB_LOGIN),
            wip_label: lookup(ENV_WIP_LABEL),
            filters: lookup(ENV_FILTERS),
            request_timeout_secs: None,
            api_base_uri: None,
        }
    }

    /// Overlays `higher` on top of `self`; values set in `higher` win
    pub fn merge(self, higher: Settings) -> Settings {
        Settings {
            access_token: higher.access_token.or(self.access_token),
            github_login: higher.github_login.or(self.github_login),
            wip_label: higher.wip_label.or(self.wip_label),
            filters: higher.filters.or(self.filters),
            request_timeout_secs: higher.request_timeout_secs.or(self.request_timeout_secs),
            api_base_uri: higher.api_base_uri.or(self.api_base_uri),
        }
    }

    /// Validates the merged settings into a [`Config`].
    ///
    /// Empty strings count as absent for every field.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let access_token = non_empty(self.access_token);
        let github_login = non_empty(self.github_login);

        let (access_token, github_login) = match (access_token, github_login) {
            (Some(access_token), Some(github_login)) => (access_token, github_login),
            (access_token, github_login) => {
                let mut fields = Vec::new();
                if access_token.is_none() {
                    fields.push("access_token");
                }
                if github_login.is_none() {
                    fields.push("github_login");
                }
                return Err(ConfigError::Missing { fields });
            }
        };

        Ok(Config {
            access_token,
            github_login,
            wip_label: non_empty(self.wip_label),
            filters: self.filters.unwrap_or_default(),
            request_timeout: self
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            api_base_uri: non_empty(self.api_base_uri),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validated, read-only configuration for one run
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub access_token: String,
    /// Viewer login; queries address the viewer as `@me`
    pub github_login: String,
    pub wip_label: Option<String>,
    /// Appended verbatim to every search query; may be empty
    pub filters: String,
    pub request_timeout: Duration,
    pub api_base_uri: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("github_login", &self.github_login)
            .field("wip_label", &self.wip_label)
            .field("filters", &self.filters)
            .field("request_timeout", &self.request_timeout)
            .field("api_base_uri", &self.api_base_uri)
            .finish()
    }
}

/// Default config file location, e.g. `~/.config/github-pr-bar/config.toml` on Linux
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::IoError("Unable to determine config directory".to_string())
    })?;

    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
