//! Configuration Management
//!
//! Handles persistent configuration storage for vtnctl.

use crate::odl::auth::{self, Credentials};
use crate::odl::client::{DEFAULT_ENDPOINT, ENDPOINT_ENV};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// RESTCONF endpoint of the controller
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vtnctl").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file; defaults when missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective endpoint (CLI > env > config > default)
    pub fn effective_endpoint(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| std::env::var(ENDPOINT_ENV).ok().filter(|e| !e.is_empty()))
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Get effective credentials (CLI > env > config > default)
    pub fn effective_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Credentials {
        let defaults = Credentials::default();
        let username = username
            .map(str::to_string)
            .or_else(auth::get_env_username)
            .or_else(|| self.username.clone())
            .unwrap_or(defaults.username);
        let password = password
            .map(str::to_string)
            .or_else(auth::get_env_password)
            .or_else(|| self.password.clone())
            .unwrap_or(defaults.password);

        Credentials::new(username, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_win() {
        let config = Config {
            base_url: Some("http://from-config:8181/".to_string()),
            username: Some("cfg-user".to_string()),
            password: Some("cfg-pass".to_string()),
        };

        assert_eq!(
            config.effective_endpoint(Some("http://from-cli:8181/")),
            "http://from-cli:8181/"
        );
        let creds = config.effective_credentials(Some("cli-user"), Some("cli-pass"));
        assert_eq!(creds, Credentials::new("cli-user", "cli-pass"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("vtnctl-config-test-{}", std::process::id()));
        let path = dir.join("config.json");

        let config = Config {
            base_url: Some("http://odl:8181/".to_string()),
            username: Some("operator".to_string()),
            password: None,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("vtnctl-config-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
