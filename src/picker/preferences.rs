//! Per-symbol preferred skin tones.

use crate::emoji_db::{Emoji, EmojiVariant, SkinTones};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Preferred tone key per symbol, keyed by symbolic name when persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkinTonePreferences {
    tones: BTreeMap<Emoji, SkinTones>,
}

impl SkinTonePreferences {
    /// Creates an empty preference set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred tones for a symbol.
    ///
    /// Fails if the symbol has no variant for that exact key.
    pub fn set(&mut self, emoji: Emoji, tones: SkinTones) -> Result<()> {
        if emoji.skin_tone_variant(tones).is_none() {
            anyhow::bail!(
                "Emoji '{}' has no skin tone variant for '{}'",
                emoji.name(),
                tones
            );
        }
        self.tones.insert(emoji, tones);
        Ok(())
    }

    /// Removes the preference for a symbol. Returns the previous value.
    pub fn remove(&mut self, emoji: Emoji) -> Option<SkinTones> {
        self.tones.remove(&emoji)
    }

    /// The stored preference for a symbol.
    #[must_use]
    pub fn get(&self, emoji: Emoji) -> Option<SkinTones> {
        self.tones.get(&emoji).copied()
    }

    /// The symbol rendered with its preferred tones, or untoned.
    #[must_use]
    pub fn preferred_variant(&self, emoji: Emoji) -> EmojiVariant {
        EmojiVariant::new(emoji, self.get(emoji))
    }

    /// Iterates stored preferences ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Emoji, SkinTones)> + '_ {
        self.tones.iter().map(|(emoji, tones)| (*emoji, *tones))
    }

    /// Number of stored preferences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// True if no preference is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Checks that every stored key is tabulated for its symbol.
    pub fn validate(&self) -> Result<()> {
        for (emoji, tones) in self.iter() {
            if emoji.skin_tone_variant(tones).is_none() {
                anyhow::bail!(
                    "Skin tone preference '{}' is not available for '{}'",
                    tones,
                    emoji.name()
                );
            }
        }
        Ok(())
    }
}
