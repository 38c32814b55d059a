//! Display ordering by sort rank.

use super::Emoji;

/// Sorts symbols in place by sort rank.
pub fn sort_by_rank(emojis: &mut [Emoji]) {
    emojis.sort_by_key(|e| e.sort_order());
}

/// Collects symbols into a rank-ordered vector, dropping duplicates.
pub fn sorted<I>(emojis: I) -> Vec<Emoji>
where
    I: IntoIterator<Item = Emoji>,
{
    let mut out: Vec<Emoji> = emojis.into_iter().collect();
    sort_by_rank(&mut out);
    out.dedup();
    out
}
