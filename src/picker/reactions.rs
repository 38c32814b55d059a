//! Quick-reaction sets and the legacy acknowledge/decline mapping.

use super::SkinTonePreferences;
use crate::emoji_db::{Emoji, EmojiVariant};
use serde::Serialize;

/// Reaction kinds understood by clients that predate emoji reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyReaction {
    /// Thumbs up
    Acknowledge,
    /// Thumbs down
    Decline,
}

impl LegacyReaction {
    /// The symbol sent for this legacy reaction.
    #[must_use]
    pub const fn emoji(self) -> Emoji {
        match self {
            Self::Acknowledge => Emoji::ThumbsUpSign,
            Self::Decline => Emoji::ThumbsDownSign,
        }
    }
}

impl Emoji {
    /// The legacy reaction this symbol maps to, if any. Tones are irrelevant.
    #[must_use]
    pub const fn legacy_reaction(self) -> Option<LegacyReaction> {
        match self {
            Self::ThumbsUpSign => Some(LegacyReaction::Acknowledge),
            Self::ThumbsDownSign => Some(LegacyReaction::Decline),
            _ => None,
        }
    }
}

/// Reactions that are always offered: thumbs up and thumbs down in the preferred tone.
#[must_use]
pub fn base_reactions(prefs: &SkinTonePreferences) -> Vec<EmojiVariant> {
    vec![
        prefs.preferred_variant(Emoji::ThumbsUpSign),
        prefs.preferred_variant(Emoji::ThumbsDownSign),
    ]
}

/// Additional reactions offered when every recipient supports emoji reactions.
#[must_use]
pub fn default_reactions(prefs: &SkinTonePreferences) -> Vec<EmojiVariant> {
    vec![
        EmojiVariant::plain(Emoji::HeavyBlackHeart),
        EmojiVariant::plain(Emoji::FaceWithTearsOfJoy),
        EmojiVariant::plain(Emoji::CryingFace),
        prefs.preferred_variant(Emoji::PersonWithFoldedHands),
    ]
}
