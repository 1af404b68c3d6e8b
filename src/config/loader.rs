use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// `~/.config/pokedex/config.toml`, or the platform equivalent.
    /// Falls back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokedex").join("config.toml")
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Strip trailing slashes from the base URL.
    pub fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.api.base_url = trimmed;
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if base_url.is_empty() {
            return Err(invalid("api.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "api.base_url '{}' must start with http:// or https://",
                base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(invalid("api.timeout_seconds must be greater than 0"));
        }
        if self.api.connect_timeout_seconds == 0 {
            return Err(invalid("api.connect_timeout_seconds must be greater than 0"));
        }
        if self.api.max_concurrent_requests == 0 {
            return Err(invalid("api.max_concurrent_requests must be greater than 0"));
        }
        if self.roster.limit == 0 {
            return Err(invalid("roster.limit must be greater than 0"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
