//! `AppConfig` struct and TOML read/write.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use cinehub_api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use cinehub_store::app_dir;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API connection configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Picks the base URL: `url_override` (flag or `CINEHUB_API_URL`) wins
    /// over the configured value.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen value is not an absolute URL.
    pub fn resolve_base_url(&self, url_override: Option<&str>) -> Result<Url> {
        let raw = url_override
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(&self.base_url);
        Url::parse(raw).with_context(|| format!("invalid API base URL: {raw}"))
    }

    /// Per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Config file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

impl AppConfig {
    /// Config file location: `{dir}/config.toml` when `dir` is given,
    /// otherwise `config.toml` in the XDG config directory
    /// (`~/.config/cinehub` by default).
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn path(dir: Option<&PathBuf>) -> Result<PathBuf> {
        let base = match dir {
            Some(d) => d.clone(),
            None => app_dir("XDG_CONFIG_HOME", ".config")?,
        };
        Ok(base.join(CONFIG_FILE_NAME))
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if `api.timeout_secs` is zero.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if config.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be at least 1 in {}", path.display());
        }
        Ok(config)
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api: ApiConfig {
                base_url: String::from("https://api.cinehub.example"),
                timeout_secs: 5,
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 10\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_load_zero_timeout_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api.timeout_secs must be at least 1")
        );
    }

    #[test]
    fn test_path_prefers_dir_override() {
        // Arrange
        let dir = PathBuf::from("/srv/cinehub");

        // Act
        let path = AppConfig::path(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/srv/cinehub/config.toml"));
    }

    #[test]
    fn test_override_wins_over_config() {
        // Arrange
        let api = ApiConfig::default();

        // Act
        let overridden = api
            .resolve_base_url(Some("https://staging.cinehub.example/api"))
            .unwrap();
        let configured = api.resolve_base_url(None).unwrap();
        let blank = api.resolve_base_url(Some("  ")).unwrap();

        // Assert
        assert_eq!(overridden.as_str(), "https://staging.cinehub.example/api");
        assert_eq!(configured.as_str(), "http://localhost:3000/");
        assert_eq!(blank, configured);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        // Arrange
        let api = ApiConfig {
            base_url: String::from("not a url"),
            timeout_secs: 30,
        };

        // Act
        let result = api.resolve_base_url(None);

        // Assert
        assert!(result.unwrap_err().to_string().contains("not a url"));
    }
}
