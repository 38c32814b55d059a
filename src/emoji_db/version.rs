//! Unicode Emoji version numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Revision of the Unicode Emoji specification (e.g., 0.6, 13.1, 15.1).
///
/// Ordered numerically, so `EmojiVersion::new(13, 1) > EmojiVersion::new(4, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmojiVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
}

impl EmojiVersion {
    /// Version of the compiled table.
    pub const CURRENT: Self = super::DATA_VERSION;

    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Default for EmojiVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for EmojiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error returned when a version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(String);

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid emoji version '{}'. Expected MAJOR or MAJOR.MINOR (e.g., 13.1)",
            self.0
        )
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for EmojiVersion {
    type Err = ParseVersionError;

    /// Parses "15", "15.1" or the emoji-test.txt form "E15.1".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('E').unwrap_or(trimmed);
        let (major, minor) = trimmed.split_once('.').unwrap_or((trimmed, "0"));
        let major = major.parse().map_err(|_| err())?;
        let minor = minor.parse().map_err(|_| err())?;
        Ok(Self::new(major, minor))
    }
}

impl Serialize for EmojiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EmojiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
