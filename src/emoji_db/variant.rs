//! A symbol together with an optional skin-tone selection.

use super::{lookup_glyph, Emoji, EmojiVersion, SkinTones};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shown in place of a symbol the rendering environment does not support.
pub const REPLACEMENT_GLYPH: &str = "\u{FFFD}";

/// A concrete selection from the picker: base symbol plus tone key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmojiVariant {
    /// Base symbol
    pub base: Emoji,
    /// Tone key; only ever set to a key tabulated for `base`
    pub skin_tones: Option<SkinTones>,
}

impl EmojiVariant {
    /// Creates a variant. A tone key the base symbol does not tabulate is dropped.
    #[must_use]
    pub fn new(base: Emoji, skin_tones: Option<SkinTones>) -> Self {
        let skin_tones = skin_tones.filter(|tones| base.skin_tone_variant(*tones).is_some());
        Self { base, skin_tones }
    }

    /// The untoned variant of a symbol.
    #[must_use]
    pub const fn plain(base: Emoji) -> Self {
        Self {
            base,
            skin_tones: None,
        }
    }

    /// Parses any glyph of the table, base or toned.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        lookup_glyph(glyph).map(|(base, skin_tones)| Self { base, skin_tones })
    }

    /// The glyph sequence for this selection.
    #[must_use]
    pub fn raw_value(&self) -> &'static str {
        self.skin_tones
            .and_then(|tones| self.base.skin_tone_variant(tones))
            .unwrap_or_else(|| self.base.glyph())
    }

    /// The glyph to render given the newest supported emoji version.
    ///
    /// Unsupported symbols render as U+FFFD.
    #[must_use]
    pub fn display_value(&self, max: EmojiVersion) -> &'static str {
        if self.base.is_available(max) {
            self.raw_value()
        } else {
            REPLACEMENT_GLYPH
        }
    }

    /// True if the base symbol has skin-tone variants.
    #[must_use]
    pub fn has_skin_tone_options(&self) -> bool {
        self.base.has_skin_tone_options()
    }
}

impl From<Emoji> for EmojiVariant {
    fn from(base: Emoji) -> Self {
        Self::plain(base)
    }
}

impl fmt::Display for EmojiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl Serialize for EmojiVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw_value())
    }
}

impl<'de> Deserialize<'de> for EmojiVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_glyph(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown emoji glyph '{s}'")))
    }
}
