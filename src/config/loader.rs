use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const ENV_API_ENDPOINT: &str = "PORTFOLIO_CMS_API_ENDPOINT";
/// Environment variable overriding `api.api_key`.
pub const ENV_API_KEY: &str = "PORTFOLIO_CMS_API_KEY";
/// Environment variable overriding `auth.admin_email`.
pub const ENV_ADMIN_EMAIL: &str = "PORTFOLIO_CMS_ADMIN_EMAIL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/portfolio-cms/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("portfolio-cms").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` to resolve variable names.
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// wipe a configured setting.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_ENDPOINT) {
            self.api.base_url = url;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api.api_key = Some(key);
        }
        if let Some(email) = get(ENV_ADMIN_EMAIL) {
            self.auth.admin_email = Some(email);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is an absolute http(s) URL
    /// - Timeouts are non-zero
    /// - The admin email, when set, looks like an address
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url '{}' must start with http:// or https://",
                    self.api.base_url
                ),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api timeouts must be greater than zero".to_string(),
            });
        }

        if let Some(email) = &self.auth.admin_email {
            if !email.contains('@') {
                return Err(ConfigError::ValidationError {
                    message: format!("auth.admin_email '{}' is not an email address", email),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_replace_configured_values() {
        let env: HashMap<&str, &str> = [
            (ENV_API_ENDPOINT, "https://cms.example.com/v2"),
            (ENV_ADMIN_EMAIL, "owner@example.com"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://cms.example.com/v2");
        assert_eq!(config.auth.admin_email.as_deref(), Some("owner@example.com"));
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = Config::default().with_overrides_from(|key| {
            (key == ENV_API_ENDPOINT).then(|| "  ".to_string())
        });
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let mut config = Config::default();
        config.api.base_url = "api/v1".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
