//! Relevance search over symbolic names, descriptions and subgroups.

use super::{Category, Emoji};

/// Searches symbols by symbolic name, description, glyph or subgroup.
///
/// Matching is case-insensitive. Results are ordered by relevance, then by
/// sort rank. An empty query returns every symbol.
///
/// # Examples
///
/// ```
/// use emojidb::emoji_db::{search, Emoji};
///
/// let results = search("thumbs");
/// assert!(results.contains(&Emoji::ThumbsUpSign));
/// ```
#[must_use]
pub fn search(query: &str) -> Vec<Emoji> {
    rank(Emoji::all(), query)
}

/// Searches within a single category.
#[must_use]
pub fn search_in_category(query: &str, category: Category) -> Vec<Emoji> {
    rank(category.emojis(), query)
}

fn rank(candidates: &[Emoji], query: &str) -> Vec<Emoji> {
    let query = query.trim();
    if query.is_empty() {
        return candidates.to_vec();
    }

    let query_lower = query.to_lowercase();
    let mut results: Vec<(Emoji, i32)> = candidates
        .iter()
        .filter_map(|&emoji| score(emoji, query, &query_lower).map(|s| (emoji, s)))
        .collect();

    // Stable, so equal scores keep rank order
    results.sort_by(|a, b| b.1.cmp(&a.1));

    results.into_iter().map(|(emoji, _)| emoji).collect()
}

fn score(emoji: Emoji, query: &str, query_lower: &str) -> Option<i32> {
    let name_lower = emoji.name().to_lowercase();
    let desc_lower = emoji.description().to_lowercase();

    // Exact match (highest priority)
    if name_lower == query_lower || desc_lower == query_lower || emoji.glyph() == query {
        return Some(100);
    }

    // Starts with query
    if name_lower.starts_with(query_lower) || desc_lower.starts_with(query_lower) {
        return Some(50);
    }

    // Contains query in name or description
    if name_lower.contains(query_lower) || desc_lower.contains(query_lower) {
        return Some(10);
    }

    // Subgroup match (lowest priority)
    if emoji.subgroup().contains(query_lower) {
        return Some(5);
    }

    None
}
