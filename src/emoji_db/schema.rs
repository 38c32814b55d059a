// Serde schema of `emoji.json`.
//
// This file is shared with `build.rs` through `include!`, so it must stay free of
// inner attributes and crate-relative paths.

use serde::{Deserialize, Serialize};

/// Top-level emoji data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiDatabase {
    /// Unicode Emoji version the table was generated against (e.g., "15.1")
    pub version: String,
    /// Picker categories in display order
    pub categories: Vec<CategoryRecord>,
    /// Every symbol in sort-rank order
    pub emojis: Vec<EmojiRecord>,
}

/// Picker category entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category ID (e.g., "smileysAndEmotion")
    pub id: String,
    /// Display name (e.g., "Smileys & Emotion")
    pub name: String,
}

/// One symbol of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Symbolic name (e.g., "thumbsUpSign")
    pub name: String,
    /// Fully-qualified glyph sequence
    pub glyph: String,
    /// CLDR short name (e.g., "thumbs up")
    pub description: String,
    /// Category ID, `None` for components
    #[serde(default)]
    pub category: Option<String>,
    /// Unicode subgroup (e.g., "hand-fingers-closed")
    pub subgroup: String,
    /// Display rank
    pub sort_order: usize,
    /// Introduction version (e.g., "0.6")
    pub version: String,
    /// Tabulated skin-tone variants
    #[serde(default)]
    pub skin_tones: Vec<SkinToneRecord>,
}

/// Skin-tone variant entry keyed by an ordered tone list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinToneRecord {
    /// Tone IDs, one or two (e.g., ["light", "dark"])
    pub tones: Vec<String>,
    /// Precomposed glyph sequence
    pub glyph: String,
}
