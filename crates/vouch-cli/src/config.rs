//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use vouch_gatekeeper::GateConfig;
use vouch_sdk::{ClientConfig, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Transaction thresholds
    #[serde(default)]
    pub gate: GateConfig,
}

/// Connection profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Registry URL
    pub registry_url: String,

    /// API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".vouch").join("config.toml"))
    }

    /// Load configuration from file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.gate.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Remove a profile. The active profile cannot be removed.
    pub fn remove_profile(&mut self, name: &str) -> Result<Profile> {
        if name == self.active_profile {
            return Err(CliError::NotPermitted(
                "Cannot delete the active profile. Switch to another profile first.".into(),
            ));
        }
        self.profiles
            .remove(name)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' does not exist", name)))
    }
}

impl Profile {
    /// Registry client configuration for this profile, with optional overrides.
    pub fn client_config(&self, registry: Option<&str>, api_key: Option<&str>) -> ClientConfig {
        ClientConfig {
            base_url: registry.unwrap_or(&self.registry_url).to_string(),
            api_key: api_key.map(str::to_string).or_else(|| self.api_key.clone()),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                registry_url: DEFAULT_REGISTRY_URL.to_string(),
                api_key: None,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            gate: GateConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_profile, "default");
        assert!(config.profiles.contains_key("default"));
        assert!(config.settings.color);
        assert_eq!(config.gate, GateConfig::default());
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();

        let profile = Profile {
            registry_url: "https://registry.example.com".to_string(),
            api_key: Some("secret".to_string()),
            timeout_secs: 5,
        };

        config.set_profile("prod".to_string(), profile);
        assert!(config.profiles.contains_key("prod"));

        config.switch_profile("prod".to_string()).unwrap();
        assert_eq!(config.active_profile, "prod");

        // Active profile is protected
        assert!(config.remove_profile("prod").is_err());
        assert!(config.remove_profile("default").is_ok());
    }

    #[test]
    fn test_switch_to_nonexistent_profile() {
        let mut config = Config::default();
        let result = config.switch_profile("nonexistent".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_client_config_overrides() {
        let profile = Profile {
            registry_url: "https://a.example.com".to_string(),
            api_key: Some("profile-key".to_string()),
            timeout_secs: 7,
        };

        let client = profile.client_config(None, None);
        assert_eq!(client.base_url, "https://a.example.com");
        assert_eq!(client.api_key.as_deref(), Some("profile-key"));
        assert_eq!(client.timeout_secs, 7);

        let client = profile.client_config(Some("https://b.example.com"), Some("flag-key"));
        assert_eq!(client.base_url, "https://b.example.com");
        assert_eq!(client.api_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.gate.large_min_score = 70;
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gate.large_min_score, 70);
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert_eq!(loaded.profiles, config.profiles);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.active_profile, "default");
    }

    #[test]
    fn test_load_rejects_bad_gate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[gate]\nbase_min_score = 90\nmedium_min_score = 40\n",
        )
        .unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(CliError::Gate(_))));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
            active_profile = "local"

            [profiles.local]
            registry_url = "http://127.0.0.1:9000"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let profile = config.get_active_profile().unwrap();
        assert_eq!(profile.registry_url, "http://127.0.0.1:9000");
        assert_eq!(profile.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.gate.large_min_score, 60);
    }
}
