//! Compiled-in Unicode emoji table.
//!
//! Every symbol is a variant of the closed [`Emoji`] enum generated by `build.rs`
//! from `emoji.json`. Each variant carries its glyph sequence, sort rank,
//! introduction version, category and skin-tone variant table. All lookups are
//! static table reads; name and glyph lookups go through compile-time perfect
//! hash maps.

mod category;
mod schema;
mod search;
mod skin_tone;
pub mod sorting;
mod variant;
mod version;

pub use category::{Category, ParseCategoryError};
pub use schema::{CategoryRecord, EmojiDatabase, EmojiRecord, SkinToneRecord};
pub use search::{search, search_in_category};
pub use skin_tone::{ParseSkinToneError, SkinTone, SkinTones};
pub use variant::{EmojiVariant, REPLACEMENT_GLYPH};
pub use version::{EmojiVersion, ParseVersionError};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Static row of the symbol table.
#[derive(Debug)]
struct EmojiData {
    name: &'static str,
    glyph: &'static str,
    description: &'static str,
    sort_order: u16,
    version: EmojiVersion,
    category: Option<Category>,
    subgroup: &'static str,
    skin_tones: &'static [(SkinTones, &'static str)],
}

include!(concat!(env!("OUT_DIR"), "/emoji_table.rs"));

impl Emoji {
    fn data(self) -> &'static EmojiData {
        &EMOJI_TABLE[self as usize]
    }

    /// Symbolic name, stable across glyph presentation changes (e.g., "thumbsUpSign").
    #[must_use]
    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// Canonical fully-qualified glyph sequence.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        self.data().glyph
    }

    /// CLDR short name (e.g., "thumbs up").
    #[must_use]
    pub fn description(self) -> &'static str {
        self.data().description
    }

    /// Display rank; dense over `0..Emoji::count()`.
    #[must_use]
    pub fn sort_order(self) -> u16 {
        self.data().sort_order
    }

    /// Emoji version that introduced the symbol.
    #[must_use]
    pub fn version(self) -> EmojiVersion {
        self.data().version
    }

    /// Picker category, `None` for components (skin tones, hair styles).
    #[must_use]
    pub fn category(self) -> Option<Category> {
        self.data().category
    }

    /// Unicode subgroup (e.g., "hand-fingers-closed").
    #[must_use]
    pub fn subgroup(self) -> &'static str {
        self.data().subgroup
    }

    /// Every tabulated tone key with its precomposed glyph, in table order.
    #[must_use]
    pub fn skin_tone_variants(self) -> &'static [(SkinTones, &'static str)] {
        self.data().skin_tones
    }

    /// Precomposed glyph for an exact tone key.
    ///
    /// Combinations missing from the table are never synthesized from other
    /// entries; callers fall back to [`Emoji::glyph`].
    #[must_use]
    pub fn skin_tone_variant(self, tones: SkinTones) -> Option<&'static str> {
        self.skin_tone_variants()
            .iter()
            .find(|(key, _)| *key == tones)
            .map(|(_, glyph)| *glyph)
    }

    /// True if the symbol has any skin-tone variants.
    #[must_use]
    pub fn has_skin_tone_options(self) -> bool {
        !self.skin_tone_variants().is_empty()
    }

    /// True if the symbol was introduced at or before `max`.
    #[must_use]
    pub fn is_available(self, max: EmojiVersion) -> bool {
        self.version() <= max
    }

    /// Looks up a symbol by symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAME_MAP.get(name).copied()
    }

    /// Looks up a symbol by its base glyph. Variant glyphs return `None`;
    /// use [`EmojiVariant::from_glyph`] for those.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match GLYPH_MAP.get(glyph) {
            Some((emoji, None)) => Some(*emoji),
            _ => None,
        }
    }

    /// All symbols in sort-rank order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &ALL_EMOJIS
    }

    /// Number of symbols in the table.
    #[must_use]
    pub fn count() -> usize {
        ALL_EMOJIS.len()
    }
}

/// Resolves any glyph of the table, base or variant.
pub(crate) fn lookup_glyph(glyph: &str) -> Option<(Emoji, Option<SkinTones>)> {
    GLYPH_MAP.get(glyph).copied()
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Error returned for an unknown symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEmojiError(String);

impl fmt::Display for ParseEmojiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown emoji '{}'", self.0)
    }
}

impl std::error::Error for ParseEmojiError {}

impl FromStr for Emoji {
    type Err = ParseEmojiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseEmojiError(s.to_string()))
    }
}

impl Serialize for Emoji {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Emoji {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Raw text of the embedded data document.
pub const EMBEDDED_JSON: &str = include_str!("emoji.json");

/// Parses the embedded data document.
///
/// The compiled table is generated from the same file, so this is only needed by
/// tooling that works on records (validation, import).
pub fn load_embedded() -> Result<EmojiDatabase> {
    parse_database(EMBEDDED_JSON).context("Failed to parse embedded emoji.json")
}

/// Parses a data document from JSON text.
pub fn parse_database(json: &str) -> Result<EmojiDatabase> {
    let db: EmojiDatabase = serde_json::from_str(json).context("Invalid emoji data document")?;
    Ok(db)
}
