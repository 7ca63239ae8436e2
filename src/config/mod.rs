// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[lookup]` - Movie database API key, endpoint and timeout
//! - `[posters]` - Poster cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `MOVIE_FINDER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use movie_finder::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{LookupTimeout, PosterCacheCapacity};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Movie database lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    /// API key for the lookup service. `--api-key` and `OMDB_API_KEY` take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Lookup endpoint URL.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LookupConfig {
    /// Endpoint to query, falling back to the default when unset or blank.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_LOOKUP_ENDPOINT)
            .to_string()
    }

    /// Clamped request timeout.
    #[must_use]
    pub fn timeout(&self) -> LookupTimeout {
        LookupTimeout::from_secs(self.timeout_secs.unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS))
    }
}

/// Poster display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostersConfig {
    /// Number of decoded posters kept in memory.
    #[serde(
        default = "default_poster_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,
}

impl Default for PostersConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_poster_cache_capacity(),
        }
    }
}

impl PostersConfig {
    /// Clamped cache capacity.
    #[must_use]
    pub fn capacity(&self) -> PosterCacheCapacity {
        PosterCacheCapacity::new(
            self.cache_capacity
                .unwrap_or(DEFAULT_POSTER_CACHE_CAPACITY),
        )
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub posters: PostersConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_LOOKUP_ENDPOINT.to_string())
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_LOOKUP_TIMEOUT_SECS)
}

fn default_poster_cache_capacity() -> Option<usize> {
    Some(DEFAULT_POSTER_CACHE_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// API Key Resolution
// =============================================================================

/// Picks the lookup API key: CLI argument, then `OMDB_API_KEY`, then config.
///
/// Blank values at any level are skipped.
#[must_use]
pub fn resolve_api_key(cli_key: Option<String>, config: &Config) -> Option<String> {
    resolve_api_key_from(cli_key, std::env::var(ENV_API_KEY).ok(), config)
}

fn resolve_api_key_from(
    cli_key: Option<String>,
    env_key: Option<String>,
    config: &Config,
) -> Option<String> {
    [cli_key, env_key, config.lookup.api_key.clone()]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            lookup: LookupConfig {
                api_key: Some("abc123".to_string()),
                endpoint: Some("https://omdb.example.test/".to_string()),
                timeout_secs: Some(5),
            },
            posters: PostersConfig {
                cache_capacity: Some(16),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.general.language.is_none());
        assert!(config.lookup.api_key.is_none());
        assert_eq!(config.lookup.endpoint(), DEFAULT_LOOKUP_ENDPOINT);
        assert_eq!(config.lookup.timeout().secs(), DEFAULT_LOOKUP_TIMEOUT_SECS);
        assert_eq!(
            config.posters.capacity().value(),
            DEFAULT_POSTER_CACHE_CAPACITY
        );
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[lookup]\napi_key = \"k\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");

        assert_eq!(loaded.lookup.api_key.as_deref(), Some("k"));
        assert_eq!(loaded.lookup.endpoint(), DEFAULT_LOOKUP_ENDPOINT);
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.posters, PostersConfig::default());
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let loaded: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid theme mode");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let lookup = LookupConfig {
            timeout_secs: Some(0),
            endpoint: Some("   ".to_string()),
            ..LookupConfig::default()
        };
        assert_eq!(lookup.timeout().secs(), 1);
        assert_eq!(lookup.endpoint(), DEFAULT_LOOKUP_ENDPOINT);

        let posters = PostersConfig {
            cache_capacity: Some(1_000_000),
        };
        assert_eq!(posters.capacity().value(), 512);
    }

    #[test]
    fn api_key_precedence_is_cli_env_config() {
        let config = Config {
            lookup: LookupConfig {
                api_key: Some("from-config".to_string()),
                ..LookupConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(
            resolve_api_key_from(Some("from-cli".into()), Some("from-env".into()), &config),
            Some("from-cli".to_string())
        );
        assert_eq!(
            resolve_api_key_from(None, Some("from-env".into()), &config),
            Some("from-env".to_string())
        );
        assert_eq!(
            resolve_api_key_from(Some("  ".into()), None, &config),
            Some("from-config".to_string())
        );
        assert_eq!(resolve_api_key_from(None, None, &Config::default()), None);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));

        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
