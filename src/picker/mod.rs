//! Picker model: category sections, recents, reactions and tone preferences.
//!
//! Everything here is derived from the static table plus user state
//! ([`SkinTonePreferences`], [`RecentEmojis`]) and the newest emoji version the
//! rendering environment supports.

mod preferences;
mod reactions;
mod recents;

pub use preferences::SkinTonePreferences;
pub use reactions::{base_reactions, default_reactions, LegacyReaction};
pub use recents::{RecentEmojis, RECENT_EMOJI_LIMIT};

use crate::emoji_db::{Category, EmojiVariant, EmojiVersion};

/// One picker tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSection {
    /// Category of the tab
    pub category: Category,
    /// Available members in rank order, in their preferred tones
    pub emojis: Vec<EmojiVariant>,
}

/// Picker contents for a given environment and user state.
#[derive(Debug, Clone, Copy)]
pub struct Picker<'a> {
    max_version: EmojiVersion,
    preferences: &'a SkinTonePreferences,
    recents: &'a RecentEmojis,
}

impl<'a> Picker<'a> {
    /// Creates a picker view.
    #[must_use]
    pub const fn new(
        max_version: EmojiVersion,
        preferences: &'a SkinTonePreferences,
        recents: &'a RecentEmojis,
    ) -> Self {
        Self {
            max_version,
            preferences,
            recents,
        }
    }

    /// Newest supported emoji version.
    #[must_use]
    pub const fn max_version(&self) -> EmojiVersion {
        self.max_version
    }

    /// One section per non-empty category, in picker order.
    #[must_use]
    pub fn sections(&self) -> Vec<PickerSection> {
        Category::ALL
            .into_iter()
            .map(|category| self.section(category))
            .filter(|section| !section.emojis.is_empty())
            .collect()
    }

    /// Available members of one category in rank order.
    #[must_use]
    pub fn section(&self, category: Category) -> PickerSection {
        let emojis = category
            .emojis()
            .iter()
            .filter(|emoji| emoji.is_available(self.max_version))
            .map(|emoji| self.preferences.preferred_variant(*emoji))
            .collect();
        PickerSection { category, emojis }
    }

    /// Recently used selections that are available, most recent first.
    #[must_use]
    pub fn recent(&self) -> Vec<EmojiVariant> {
        self.recents
            .ordered()
            .into_iter()
            .filter(|variant| variant.base.is_available(self.max_version))
            .collect()
    }
}
