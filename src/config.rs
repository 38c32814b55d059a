//! Configuration management for the emoji picker.
//!
//! This module handles loading, validating, and saving picker configuration
//! in TOML format with platform-specific directory resolution.

use crate::emoji_db::{Emoji, EmojiVariant, EmojiVersion, SkinTones};
use crate::picker::{RecentEmojis, SkinTonePreferences};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "EMOJIDB_CONFIG_DIR";

/// Picker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Newest emoji version the rendering environment supports
    #[serde(default)]
    pub max_emoji_version: EmojiVersion,
    /// Recently used glyphs with their recency position
    #[serde(default)]
    pub recent: RecentEmojis,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_emoji_version: EmojiVersion::CURRENT,
            recent: RecentEmojis::new(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/emojidb/config.toml`
/// - macOS: `~/Library/Application Support/emojidb/config.toml`
/// - Windows: `%APPDATA%\emojidb\config.toml`
///
/// `EMOJIDB_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - `max_emoji_version` must not be newer than the compiled table
/// - every skin tone preference must name a tabulated variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Picker settings
    #[serde(default)]
    pub picker: PickerConfig,
    /// Preferred skin tones by symbolic name
    #[serde(default)]
    pub skin_tones: SkinTonePreferences,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/emojidb/`
    /// - macOS: `~/Library/Application Support/emojidb/`
    /// - Windows: `%APPDATA%\emojidb\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("emojidb");
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(
            path = %config_path.display(),
            preferences = config.skin_tones.len(),
            recents = config.picker.recent.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "Saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.picker.max_emoji_version > EmojiVersion::CURRENT {
            anyhow::bail!(
                "max_emoji_version {} is newer than the emoji table ({})",
                self.picker.max_emoji_version,
                EmojiVersion::CURRENT
            );
        }
        self.skin_tones.validate()
    }

    /// Sets the newest supported emoji version with validation.
    pub fn set_max_emoji_version(&mut self, version: EmojiVersion) -> Result<()> {
        let previous = self.picker.max_emoji_version;
        self.picker.max_emoji_version = version;
        if let Err(err) = self.validate() {
            self.picker.max_emoji_version = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the preferred skin tones for a symbol.
    pub fn set_skin_tone(&mut self, emoji: Emoji, tones: SkinTones) -> Result<()> {
        self.skin_tones.set(emoji, tones)
    }

    /// Records a picker selection in the recents list.
    pub fn record_recent(&mut self, variant: EmojiVariant) {
        self.picker.recent.record(variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji_db::SkinTone;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.picker.max_emoji_version, EmojiVersion::CURRENT);
        assert!(config.picker.recent.is_empty());
        assert!(config.skin_tones.is_empty());
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());

        let mut config = Config::new();
        config.picker.max_emoji_version = EmojiVersion::new(99, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_max_emoji_version_rejects_future() {
        let mut config = Config::new();
        assert!(config.set_max_emoji_version(EmojiVersion::new(13, 1)).is_ok());
        assert!(config.set_max_emoji_version(EmojiVersion::new(16, 0)).is_err());
        // Rejected value is not kept
        assert_eq!(config.picker.max_emoji_version, EmojiVersion::new(13, 1));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.picker.max_emoji_version = EmojiVersion::new(14, 0);
        config
            .set_skin_tone(Emoji::ThumbsUpSign, SkinTones::Single(SkinTone::Medium))
            .unwrap();
        config
            .set_skin_tone(
                Emoji::PeopleHoldingHands,
                SkinTones::Pair(SkinTone::Light, SkinTone::Dark),
            )
            .unwrap();
        config.record_recent(Emoji::CryingFace.into());
        config.record_recent(EmojiVariant::new(
            Emoji::ThumbsUpSign,
            Some(SkinTones::Single(SkinTone::Dark)),
        ));

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        assert!(content.contains("max_emoji_version = \"14.0\""));
        assert!(content.contains("thumbsUpSign"));
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.picker.recent.ordered()[0].raw_value(), "👍🏿");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let loaded = Config::from_toml("").unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_untabulated_preference_is_rejected() {
        let content = r#"
[skin_tones]
faceWithTearsOfJoy = ["light"]
"#;
        assert!(Config::from_toml(content).is_err());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let content = r#"
[skin_tones]
notAnEmoji = ["light"]
"#;
        assert!(Config::from_toml(content).is_err());
    }
}
