//! emojidb Library
//!
//! This library provides the compiled Unicode emoji table used by emoji
//! pickers: symbolic names, glyph sequences, sort ranks, introduction versions,
//! skin-tone variants and picker categories. It also carries the picker state
//! (preferred tones, recently used emoji, reactions) and the tooling that
//! validates, exports and regenerates the data document.

// Module declarations
pub mod cli;
pub mod config;
pub mod emoji_db;
pub mod export;
pub mod import;
pub mod picker;
pub mod validate;

pub use emoji_db::{Category, Emoji, EmojiVariant, EmojiVersion, SkinTone, SkinTones};
