//! Skin-tone modifiers and tone-combination keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the five Fitzpatrick skin-tone modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinTone {
    /// U+1F3FB
    Light,
    /// U+1F3FC
    MediumLight,
    /// U+1F3FD
    Medium,
    /// U+1F3FE
    MediumDark,
    /// U+1F3FF
    Dark,
}

impl SkinTone {
    /// All tones, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// Stable identifier used in data files and configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::MediumLight => "mediumLight",
            Self::Medium => "medium",
            Self::MediumDark => "mediumDark",
            Self::Dark => "dark",
        }
    }

    /// The modifier codepoint appended to a base glyph.
    #[must_use]
    pub const fn modifier(self) -> char {
        match self {
            Self::Light => '\u{1F3FB}',
            Self::MediumLight => '\u{1F3FC}',
            Self::Medium => '\u{1F3FD}',
            Self::MediumDark => '\u{1F3FE}',
            Self::Dark => '\u{1F3FF}',
        }
    }

    /// Looks up the tone for a modifier codepoint.
    #[must_use]
    pub fn from_modifier(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.modifier() == c)
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for an unknown skin tone or tone combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSkinToneError(String);

impl fmt::Display for ParseSkinToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid skin tone '{}'. Must be one of: light, mediumLight, medium, mediumDark, dark",
            self.0
        )
    }
}

impl std::error::Error for ParseSkinToneError {}

impl FromStr for SkinTone {
    type Err = ParseSkinToneError;

    /// Accepts the identifier ("mediumLight") and kebab/snake case ("medium-light").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tone| tone.id().to_lowercase() == normalized)
            .ok_or_else(|| ParseSkinToneError(s.to_string()))
    }
}

/// Key of the skin-tone variant table: one tone, or an ordered pair for
/// two-person symbols where each participant is toned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinTones {
    /// A single tone applied to the whole symbol
    Single(SkinTone),
    /// Tones of the first and second participant
    Pair(SkinTone, SkinTone),
}

impl SkinTones {
    /// Builds a key from one or two tones. Returns `None` for any other length.
    #[must_use]
    pub fn from_slice(tones: &[SkinTone]) -> Option<Self> {
        match *tones {
            [tone] => Some(Self::Single(tone)),
            [first, second] => Some(Self::Pair(first, second)),
            _ => None,
        }
    }

    /// The tones in participant order.
    #[must_use]
    pub fn tones(self) -> Vec<SkinTone> {
        match self {
            Self::Single(tone) => vec![tone],
            Self::Pair(first, second) => vec![first, second],
        }
    }

    /// Number of tones in the key (1 or 2).
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
        }
    }

    /// Always false; a key holds at least one tone.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }
}

impl From<SkinTone> for SkinTones {
    fn from(tone: SkinTone) -> Self {
        Self::Single(tone)
    }
}

impl fmt::Display for SkinTones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(tone) => write!(f, "{tone}"),
            Self::Pair(first, second) => write!(f, "{first},{second}"),
        }
    }
}

impl FromStr for SkinTones {
    type Err = ParseSkinToneError;

    /// Parses "light" or "light,dark".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tones = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<SkinTone>, _>>()?;
        Self::from_slice(&tones).ok_or_else(|| ParseSkinToneError(s.to_string()))
    }
}

impl Serialize for SkinTones {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ids: Vec<&str> = self.tones().into_iter().map(SkinTone::id).collect();
        ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SkinTones {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<String>::deserialize(deserializer)?;
        let tones = ids
            .iter()
            .map(|id| id.parse::<SkinTone>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(serde::de::Error::custom)?;
        Self::from_slice(&tones).ok_or_else(|| {
            serde::de::Error::invalid_length(tones.len(), &"one or two skin tones")
        })
    }
}
