//! Importer for Unicode `emoji-test.txt`.
//!
//! Regenerates a data document from the file published with each Unicode
//! Emoji release. Fully-qualified and component lines become symbols in file
//! order; lines carrying skin-tone modifiers are folded into the symbol they
//! modify. Symbolic names of symbols already present in an existing document
//! are kept so that persisted preferences keep resolving.

use crate::emoji_db::{
    Category, CategoryRecord, EmojiDatabase, EmojiRecord, EmojiVersion, SkinTone, SkinToneRecord,
    SkinTones,
};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Counts reported after an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Symbols written
    pub emojis: usize,
    /// Skin-tone variants attached to symbols
    pub skin_tone_variants: usize,
    /// Symbols that kept their name from the existing document
    pub kept_names: usize,
    /// Symbols that received a generated name
    pub new_names: usize,
    /// Minimally-qualified and unqualified lines
    pub skipped: usize,
    /// Toned lines whose base symbol could not be found
    pub orphaned: usize,
}

/// A parsed document with its summary.
#[derive(Debug, Clone)]
pub struct Import {
    /// The regenerated document
    pub database: EmojiDatabase,
    /// What happened
    pub summary: ImportSummary,
}

struct Line<'a> {
    glyph: String,
    status: &'a str,
    version: EmojiVersion,
    description: &'a str,
}

/// Parses `emoji-test.txt` content.
///
/// `existing` supplies symbolic names by glyph; pass an empty document to
/// generate every name.
pub fn parse_emoji_test(text: &str, existing: &EmojiDatabase) -> Result<Import> {
    let header_regex = Regex::new(r"^#\s*Version:\s*(\d+(?:\.\d+)?)\s*$")
        .context("Failed to compile version regex")?;
    let group_regex =
        Regex::new(r"^#\s*group:\s*(.+?)\s*$").context("Failed to compile group regex")?;
    let subgroup_regex =
        Regex::new(r"^#\s*subgroup:\s*(.+?)\s*$").context("Failed to compile subgroup regex")?;
    let line_regex = Regex::new(
        r"^([0-9A-Fa-f]+(?:\s+[0-9A-Fa-f]+)*)\s*;\s*([a-z-]+)\s*#\s*\S+\s+E(\d+\.\d+)\s+(.+?)\s*$",
    )
    .context("Failed to compile data line regex")?;

    let existing_names: HashMap<&str, &str> = existing
        .emojis
        .iter()
        .map(|r| (r.glyph.as_str(), r.name.as_str()))
        .collect();

    let mut document_version: Option<EmojiVersion> = None;
    let mut group: Option<Option<Category>> = None;
    let mut subgroup = String::new();
    let mut records: Vec<EmojiRecord> = Vec::new();
    let mut by_glyph: HashMap<String, usize> = HashMap::new();
    let mut by_description: HashMap<String, usize> = HashMap::new();
    let mut used_names: HashSet<String> = HashSet::new();
    let mut summary = ImportSummary::default();

    for (line_num, raw) in text.lines().enumerate() {
        let line_num = line_num + 1;
        let raw = raw.trim_end();

        if raw.is_empty() {
            continue;
        }

        if raw.starts_with('#') {
            if let Some(captures) = header_regex.captures(raw) {
                document_version = Some(
                    captures[1]
                        .parse()
                        .context(format!("Invalid version header at line {line_num}"))?,
                );
            } else if let Some(captures) = group_regex.captures(raw) {
                group = Some(parse_group(&captures[1]).context(format!("Line {line_num}"))?);
            } else if let Some(captures) = subgroup_regex.captures(raw) {
                subgroup = captures[1].to_string();
            }
            continue;
        }

        let captures = line_regex
            .captures(raw)
            .ok_or_else(|| anyhow::anyhow!("Invalid data line {line_num}: {raw}"))?;
        let line = Line {
            glyph: decode_codepoints(&captures[1]).context(format!("Line {line_num}"))?,
            status: captures.get(2).map_or("", |m| m.as_str()),
            version: captures[3]
                .parse()
                .context(format!("Invalid version at line {line_num}"))?,
            description: captures.get(4).map_or("", |m| m.as_str()),
        };

        if line.status != "fully-qualified" && line.status != "component" {
            summary.skipped += 1;
            continue;
        }

        let category =
            group.ok_or_else(|| anyhow::anyhow!("Data line {line_num} precedes any group"))?;

        if let Some(tones) = variant_tones(&line.glyph) {
            match find_base(&line, &by_glyph, &by_description) {
                Some(index) => {
                    records[index].skin_tones.push(SkinToneRecord {
                        tones: tones.tones().iter().map(|t| t.id().to_string()).collect(),
                        glyph: line.glyph,
                    });
                    summary.skin_tone_variants += 1;
                }
                None => {
                    tracing::warn!(
                        line = line_num,
                        description = line.description,
                        "No base symbol for toned line"
                    );
                    summary.orphaned += 1;
                }
            }
            continue;
        }

        let name = match existing_names.get(line.glyph.as_str()) {
            Some(name) if !used_names.contains(*name) => {
                summary.kept_names += 1;
                (*name).to_string()
            }
            _ => {
                summary.new_names += 1;
                unique_name(&generate_name(line.description), &used_names)
            }
        };
        used_names.insert(name.clone());

        let index = records.len();
        by_glyph.insert(strip_variation_selectors(&line.glyph), index);
        by_description.insert(line.description.to_string(), index);
        records.push(EmojiRecord {
            name,
            glyph: line.glyph,
            description: line.description.to_string(),
            category: category.map(|c| c.id().to_string()),
            subgroup: subgroup.clone(),
            sort_order: index,
            version: line.version.to_string(),
            skin_tones: Vec::new(),
        });
    }

    if records.is_empty() {
        anyhow::bail!("No emoji found in input");
    }

    let version = document_version
        .or_else(|| {
            records
                .iter()
                .filter_map(|r| r.version.parse::<EmojiVersion>().ok())
                .max()
        })
        .unwrap_or(EmojiVersion::CURRENT);

    summary.emojis = records.len();
    tracing::info!(
        version = %version,
        emojis = summary.emojis,
        variants = summary.skin_tone_variants,
        new_names = summary.new_names,
        skipped = summary.skipped,
        "Parsed emoji-test.txt"
    );

    let database = EmojiDatabase {
        version: version.to_string(),
        categories: Category::ALL
            .iter()
            .map(|c| CategoryRecord {
                id: c.id().to_string(),
                name: c.display_name().to_string(),
            })
            .collect(),
        emojis: records,
    };

    Ok(Import { database, summary })
}

/// Maps a group header to a category; "Component" has none.
fn parse_group(name: &str) -> Result<Option<Category>> {
    if name == "Component" {
        return Ok(None);
    }
    Category::from_display_name(name)
        .map(Some)
        .ok_or_else(|| anyhow::anyhow!("Unknown group '{name}'"))
}

fn decode_codepoints(field: &str) -> Result<String> {
    field
        .split_whitespace()
        .map(|hex| {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| anyhow::anyhow!("Invalid codepoint '{hex}'"))
        })
        .collect()
}

/// Tone key of a toned sequence, read from its modifiers in order.
///
/// Bare modifiers (the skin-tone components) are symbols, not variants.
fn variant_tones(glyph: &str) -> Option<SkinTones> {
    if glyph.chars().count() < 2 {
        return None;
    }
    let tones: Vec<SkinTone> = glyph.chars().filter_map(SkinTone::from_modifier).collect();
    SkinTones::from_slice(&tones)
}

fn strip_variation_selectors(glyph: &str) -> String {
    glyph.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}

/// Finds the symbol a toned line belongs to.
///
/// Tries the glyph with modifiers removed, then the description with its
/// skin tone parts removed, then the description head ("kiss: person,
/// person, light skin tone, dark skin tone" belongs to "kiss").
fn find_base(
    line: &Line<'_>,
    by_glyph: &HashMap<String, usize>,
    by_description: &HashMap<String, usize>,
) -> Option<usize> {
    let untoned: String = line
        .glyph
        .chars()
        .filter(|c| SkinTone::from_modifier(*c).is_none() && *c != VARIATION_SELECTOR)
        .collect();
    if let Some(index) = by_glyph.get(&untoned) {
        return Some(*index);
    }

    let (head, rest) = line
        .description
        .split_once(": ")
        .unwrap_or((line.description, ""));
    let remaining: Vec<&str> = rest
        .split(", ")
        .filter(|part| !part.is_empty() && !part.ends_with("skin tone"))
        .collect();
    let base_description = if remaining.is_empty() {
        head.to_string()
    } else {
        format!("{head}: {}", remaining.join(", "))
    };

    by_description
        .get(&base_description)
        .or_else(|| by_description.get(head))
        .copied()
}

/// Builds a camelCase identifier from a CLDR short name.
fn generate_name(description: &str) -> String {
    let folded: String = description.chars().filter_map(fold_latin).collect();
    let mut name = String::new();
    for word in folded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let word = word.to_ascii_lowercase();
        if name.is_empty() {
            name.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.push(first.to_ascii_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        let mut chars = name.chars();
        let rest = chars
            .next()
            .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
            .unwrap_or_default();
        name = format!("emoji{rest}");
    }
    name
}

fn unique_name(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

// Apostrophes and periods are dropped so they do not split words
fn fold_latin(c: char) -> Option<char> {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Å' | 'Á' => Some('a'),
        'é' | 'è' | 'ê' | 'ë' | 'É' => Some('e'),
        'í' | 'ì' | 'î' | 'ï' => Some('i'),
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => Some('o'),
        'ú' | 'ù' | 'û' | 'ü' => Some('u'),
        'ñ' => Some('n'),
        'ç' => Some('c'),
        '’' | '\'' | '.' => None,
        other => Some(other),
    }
}
