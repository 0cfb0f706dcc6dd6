// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[feeds]` - Feed sources, edition size, delay between requests
//! - `[ticker]` - Breaking-news headlines and rotation speed
//! - `[images]` - Card illustration downloads
//! - `[telegram]` - Bot credentials for sharing articles
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `COMIC_DAILY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! The Telegram credentials can also come from `TELEGRAM_BOT_TOKEN` and
//! `TELEGRAM_CHAT_ID`, which win over the file.
//!
//! # Examples
//!
//! ```no_run
//! use comic_daily::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::news::service::FeedSource;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the Telegram bot token.
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the Telegram chat id.
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

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

/// Where the edition comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedsConfig {
    /// Number of stories in one edition.
    #[serde(
        default = "default_max_articles",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_articles: Option<usize>,

    /// Pause between two feed requests, in milliseconds.
    #[serde(
        default = "default_request_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_delay_ms: Option<u64>,

    /// RSS/Atom feeds, fetched in order.
    #[serde(default = "default_feed_sources")]
    pub sources: Vec<FeedSource>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            max_articles: default_max_articles(),
            request_delay_ms: default_request_delay_ms(),
            sources: default_feed_sources(),
        }
    }
}

impl FeedsConfig {
    /// Edition size, clamped to the supported range.
    #[must_use]
    pub fn max_articles(&self) -> usize {
        self.max_articles
            .unwrap_or(DEFAULT_MAX_ARTICLES)
            .clamp(MIN_MAX_ARTICLES, MAX_MAX_ARTICLES)
    }

    /// Delay between requests, clamped to the supported range.
    #[must_use]
    pub fn request_delay(&self) -> Duration {
        let millis = self
            .request_delay_ms
            .unwrap_or(DEFAULT_REQUEST_DELAY_MS)
            .min(MAX_REQUEST_DELAY_MS);
        Duration::from_millis(millis)
    }
}

/// Breaking-news ticker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerConfig {
    /// Headlines shown before the trending topics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headlines: Option<Vec<String>>,

    /// Seconds between two ticker advances.
    #[serde(
        default = "default_rotate_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotate_secs: Option<u32>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            headlines: None,
            rotate_secs: default_rotate_secs(),
        }
    }
}

impl TickerConfig {
    /// Configured headlines, or the built-in ones when unset.
    #[must_use]
    pub fn headlines(&self) -> Vec<String> {
        self.headlines
            .clone()
            .unwrap_or_else(default_ticker_headlines)
    }

    #[must_use]
    pub fn rotate_interval(&self) -> Duration {
        let secs = self
            .rotate_secs
            .unwrap_or(DEFAULT_TICKER_ROTATE_SECS)
            .clamp(MIN_TICKER_ROTATE_SECS, MAX_TICKER_ROTATE_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

/// Card illustration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    /// Whether card images are downloaded at all.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Number of images kept in memory.
    #[serde(
        default = "default_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Telegram sharing credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TelegramConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// Both values present and non-blank.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.bot_token) && filled(&self.chat_id)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub ticker: TickerConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl Config {
    /// Returns a copy with `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID` from the
    /// environment applied. The result is for building the publisher only and
    /// is never saved.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::with_env_overrides`] with an arbitrary lookup.
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(token) = non_empty(ENV_TELEGRAM_BOT_TOKEN) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = non_empty(ENV_TELEGRAM_CHAT_ID) {
            self.telegram.chat_id = Some(chat_id);
        }
        self
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_articles() -> Option<usize> {
    Some(DEFAULT_MAX_ARTICLES)
}

fn default_request_delay_ms() -> Option<u64> {
    Some(DEFAULT_REQUEST_DELAY_MS)
}

fn default_rotate_secs() -> Option<u32> {
    Some(DEFAULT_TICKER_ROTATE_SECS)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_CAPACITY)
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
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to display.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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
    if let Some(path) = config_path_with_override(base_dir) {
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
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            feeds: FeedsConfig {
                max_articles: Some(20),
                request_delay_ms: Some(0),
                sources: vec![FeedSource::new("local", "https://localhost/feed.xml")],
            },
            ticker: TickerConfig {
                headlines: Some(vec!["HELLO".to_string()]),
                rotate_secs: Some(9),
            },
            images: ImagesConfig {
                enabled: Some(false),
                cache_capacity: Some(8),
            },
            telegram: TelegramConfig::default(),
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
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[ticker]\nrotate_secs = 2\n").expect("failed to write config");

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.ticker.rotate_secs, Some(2));
        assert_eq!(config.feeds, FeedsConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.feeds.max_articles(), DEFAULT_MAX_ARTICLES);
        assert_eq!(config.feeds.sources.len(), DEFAULT_FEED_SOURCES.len());
        assert_eq!(
            config.feeds.request_delay(),
            Duration::from_millis(DEFAULT_REQUEST_DELAY_MS)
        );
        assert_eq!(config.ticker.headlines().len(), DEFAULT_TICKER_HEADLINES.len());
        assert_eq!(config.images.enabled, Some(true));
        assert!(!config.telegram.is_configured());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let feeds = FeedsConfig {
            max_articles: Some(0),
            request_delay_ms: Some(u64::MAX),
            sources: Vec::new(),
        };
        assert_eq!(feeds.max_articles(), MIN_MAX_ARTICLES);
        assert_eq!(
            feeds.request_delay(),
            Duration::from_millis(MAX_REQUEST_DELAY_MS)
        );

        let ticker = TickerConfig {
            headlines: None,
            rotate_secs: Some(0),
        };
        assert_eq!(
            ticker.rotate_interval(),
            Duration::from_secs(u64::from(MIN_TICKER_ROTATE_SECS))
        );
    }

    #[test]
    fn environment_overrides_telegram_credentials() {
        let env: HashMap<&str, &str> = [
            (ENV_TELEGRAM_BOT_TOKEN, "123:abc"),
            (ENV_TELEGRAM_CHAT_ID, "@daily"),
        ]
        .into_iter()
        .collect();
        let config = Config {
            telegram: TelegramConfig {
                bot_token: Some("from-file".into()),
                chat_id: None,
            },
            ..Config::default()
        }
        .with_overrides_from(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.telegram.bot_token.as_deref(), Some("123:abc"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("@daily"));
        assert!(config.telegram.is_configured());
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let config = Config {
            telegram: TelegramConfig {
                bot_token: Some("kept".into()),
                chat_id: Some("kept".into()),
            },
            ..Config::default()
        }
        .with_overrides_from(|_| Some("  ".to_string()));
        assert_eq!(config.telegram.bot_token.as_deref(), Some("kept"));
    }

    #[test]
    fn environment_credentials_never_reach_the_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let mut config = Config::default();

        let credentials = config.clone().with_overrides_from(|key| match key {
            ENV_TELEGRAM_BOT_TOKEN => Some("123:SECRET".to_string()),
            ENV_TELEGRAM_CHAT_ID => Some("@daily".to_string()),
            _ => None,
        });
        assert!(credentials.telegram.is_configured());

        config.general.language = Some("fr".to_string());
        save_to_path(&config, &config_path).expect("failed to save config");

        let written = fs::read_to_string(&config_path).expect("failed to read config");
        assert!(written.contains("fr"));
        assert!(!written.contains("SECRET"));
        assert!(!written.contains("@daily"));
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(loaded.telegram.bot_token.is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }
}
