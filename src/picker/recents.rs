//! Recently used emoji.

use crate::emoji_db::EmojiVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of remembered glyphs.
pub const RECENT_EMOJI_LIMIT: usize = 30;

/// Recently used glyphs mapped to their recency position (0 = most recent).
///
/// Glyphs are stored as raw strings so that entries written by a newer table
/// survive a downgrade; unknown glyphs are skipped when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentEmojis {
    positions: BTreeMap<String, u32>,
}

impl RecentEmojis {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a selection to the front, evicting the oldest entry past the limit.
    pub fn record(&mut self, variant: EmojiVariant) {
        // Positions loaded from a config file may be sparse or arbitrarily large
        self.compact();

        let glyph = variant.raw_value();
        let previous = self.positions.remove(glyph);

        for position in self.positions.values_mut() {
            if previous.is_none_or(|p| *position < p) {
                *position = position.saturating_add(1);
            }
        }
        self.positions.insert(glyph.to_string(), 0);

        self.positions
            .retain(|_, position| (*position as usize) < RECENT_EMOJI_LIMIT);
        self.compact();
    }

    /// Selections ordered most recent first. Unparseable glyphs are dropped.
    #[must_use]
    pub fn ordered(&self) -> Vec<EmojiVariant> {
        let mut entries: Vec<(&String, &u32)> = self.positions.iter().collect();
        entries.sort_by_key(|(_, position)| **position);
        entries
            .into_iter()
            .filter_map(|(glyph, _)| EmojiVariant::from_glyph(glyph))
            .collect()
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Number of stored glyphs, including unparseable ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // Renumber positions to 0..n keeping their order
    fn compact(&mut self) {
        let mut entries: Vec<(String, u32)> = std::mem::take(&mut self.positions)
            .into_iter()
            .collect();
        entries.sort_by_key(|(_, position)| *position);
        self.positions = entries
            .into_iter()
            .enumerate()
            .map(|(index, (glyph, _))| (glyph, u32::try_from(index).unwrap_or(u32::MAX)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji_db::{Emoji, SkinTone, SkinTones};

    #[test]
    fn test_record_orders_most_recent_first() {
        let mut recents = RecentEmojis::new();
        recents.record(Emoji::CryingFace.into());
        recents.record(Emoji::HeavyBlackHeart.into());
        recents.record(Emoji::ThumbsUpSign.into());

        let ordered: Vec<Emoji> = recents.ordered().iter().map(|v| v.base).collect();
        assert_eq!(
            ordered,
            vec![Emoji::ThumbsUpSign, Emoji::HeavyBlackHeart, Emoji::CryingFace]
        );
    }

    #[test]
    fn test_rerecord_moves_to_front() {
        let mut recents = RecentEmojis::new();
        recents.record(Emoji::CryingFace.into());
        recents.record(Emoji::HeavyBlackHeart.into());
        recents.record(Emoji::CryingFace.into());

        let ordered: Vec<Emoji> = recents.ordered().iter().map(|v| v.base).collect();
        assert_eq!(ordered, vec![Emoji::CryingFace, Emoji::HeavyBlackHeart]);
        assert_eq!(recents.len(), 2);
    }

    #[test]
    fn test_toned_variants_are_distinct_entries() {
        let mut recents = RecentEmojis::new();
        recents.record(Emoji::ThumbsUpSign.into());
        recents.record(EmojiVariant::new(
            Emoji::ThumbsUpSign,
            Some(SkinTones::Single(SkinTone::Dark)),
        ));
        let ordered = recents.ordered();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].raw_value(), "👍🏿");
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut recents = RecentEmojis::new();
        for emoji in Emoji::all().iter().take(RECENT_EMOJI_LIMIT + 5) {
            recents.record((*emoji).into());
        }
        assert_eq!(recents.len(), RECENT_EMOJI_LIMIT);
        let ordered = recents.ordered();
        assert_eq!(ordered[0].base, Emoji::all()[RECENT_EMOJI_LIMIT + 4]);
        assert!(!ordered.iter().any(|v| v.base == Emoji::all()[0]));
    }

    #[test]
    fn test_record_after_loading_large_positions() {
        let mut recents: RecentEmojis =
            toml::from_str("\"😢\" = 4294967295\n\"❤️\" = 4294967290\n").unwrap();
        recents.record(Emoji::ThumbsUpSign.into());

        let ordered: Vec<Emoji> = recents.ordered().iter().map(|v| v.base).collect();
        assert_eq!(
            ordered,
            vec![Emoji::ThumbsUpSign, Emoji::HeavyBlackHeart, Emoji::CryingFace]
        );
        assert_eq!(recents.len(), 3);
    }

    #[test]
    fn test_unparseable_entries_are_skipped() {
        let recents: RecentEmojis =
            serde_json::from_str(r#"{"👍": 1, "not-an-emoji": 0, "😢": 2}"#).unwrap();
        let ordered: Vec<Emoji> = recents.ordered().iter().map(|v| v.base).collect();
        assert_eq!(ordered, vec![Emoji::ThumbsUpSign, Emoji::CryingFace]);
        assert_eq!(recents.len(), 3);
    }
}
