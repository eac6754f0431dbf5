//! Configuration management for minbar.
//!
//! Configuration is read from `~/.config/minbar/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub quran: QuranConfig,
    pub news: NewsConfig,
    pub playback: PlaybackConfig,
}

/// Quran content API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuranConfig {
    /// Catalog endpoint; surah detail is fetched from `<api_base>/<number>`.
    pub api_base: String,
}

impl Default for QuranConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.hcmasjid.uk/quran/surah".into(),
        }
    }
}

/// News feed settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub feed_url: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://rss.app/feeds/gXqCbgAZMykAZE7J.xml".into(),
        }
    }
}

/// Audio playback settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How often to check for end-of-stream (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
        }
    }
}

impl PlaybackConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating a commented
    /// default file there when none exists.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Parsed Quran API base URL.
    pub fn quran_api_base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.quran.api_base).map_err(|e| ConfigError::InvalidUrl {
            key: "quran.api_base",
            source: e,
        })
    }

    /// Parsed news feed URL.
    pub fn news_feed_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.news.feed_url).map_err(|e| ConfigError::InvalidUrl {
            key: "news.feed_url",
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/minbar/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("minbar").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# minbar configuration

[quran]
# Catalog endpoint returning the JSON array of surahs.
# Verse detail is fetched from "<api_base>/<surah number>".
api_base = "https://api.hcmasjid.uk/quran/surah"

[news]
# RSS feed with mosque announcements.
feed_url = "https://rss.app/feeds/gXqCbgAZMykAZE7J.xml"

[playback]
# How often to check whether a recitation finished (milliseconds).
poll_interval_ms = 250
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid URL in config key {key}: {source}")]
    InvalidUrl {
        key: &'static str,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.quran.api_base, QuranConfig::default().api_base);
        assert_eq!(config.playback.poll_interval_ms, 250);
        config.quran_api_base().unwrap();
        config.news_feed_url().unwrap();
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[news]
feed_url = "https://rss.app/feeds/other.xml"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(config.news.feed_url, "https://rss.app/feeds/other.xml");
        // Default value
        assert_eq!(config.quran.api_base, QuranConfig::default().api_base);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.playback.poll_interval_ms, 250);
    }

    #[test]
    fn test_invalid_url_reported_with_key() {
        let config: Config = toml::from_str("[quran]\napi_base = \"not a url\"").unwrap();
        let err = config.quran_api_base().unwrap_err();
        assert!(err.to_string().contains("quran.api_base"));
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minbar").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.playback.poll_interval_ms, 250);

        // A second load reads the file it just wrote.
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.quran.api_base, config.quran.api_base);
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not toml [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
