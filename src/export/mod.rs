//! Export of the compiled table back into a data document.
//!
//! The output uses the same layout as the committed `emoji.json` (one compact
//! record per line), so exporting an unmodified build reproduces the file
//! byte for byte.

use crate::emoji_db::{
    Category, CategoryRecord, Emoji, EmojiDatabase, EmojiRecord, EmojiVersion, SkinToneRecord,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rebuilds the data document from the compiled table.
#[must_use]
pub fn to_database() -> EmojiDatabase {
    let categories = Category::ALL
        .iter()
        .map(|category| CategoryRecord {
            id: category.id().to_string(),
            name: category.display_name().to_string(),
        })
        .collect();

    let emojis = Emoji::all().iter().map(|emoji| to_record(*emoji)).collect();

    EmojiDatabase {
        version: EmojiVersion::CURRENT.to_string(),
        categories,
        emojis,
    }
}

fn to_record(emoji: Emoji) -> EmojiRecord {
    EmojiRecord {
        name: emoji.name().to_string(),
        glyph: emoji.glyph().to_string(),
        description: emoji.description().to_string(),
        category: emoji.category().map(|c| c.id().to_string()),
        subgroup: emoji.subgroup().to_string(),
        sort_order: usize::from(emoji.sort_order()),
        version: emoji.version().to_string(),
        skin_tones: emoji
            .skin_tone_variants()
            .iter()
            .map(|(key, glyph)| SkinToneRecord {
                tones: key.tones().iter().map(|t| t.id().to_string()).collect(),
                glyph: (*glyph).to_string(),
            })
            .collect(),
    }
}

/// Serializes a data document in the committed layout.
pub fn to_json(db: &EmojiDatabase) -> Result<String> {
    let mut out = String::from("{\n");
    out.push_str(&format!(
        "  \"version\": {},\n",
        serde_json::to_string(&db.version)?
    ));

    out.push_str("  \"categories\": [\n");
    push_records(&mut out, &db.categories)?;
    out.push_str("  ],\n");

    out.push_str("  \"emojis\": [\n");
    push_records(&mut out, &db.emojis)?;
    out.push_str("  ]\n}\n");

    Ok(out)
}

fn push_records<T: serde::Serialize>(out: &mut String, records: &[T]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        let line = serde_json::to_string(record).context("Failed to serialize record")?;
        out.push_str("    ");
        out.push_str(&line);
        if idx + 1 < records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    Ok(())
}

/// Writes a data document to `path` using a temp file and rename.
pub fn write_json(db: &EmojiDatabase, path: &Path) -> Result<()> {
    let content = to_json(db)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)
        .context(format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .context(format!("Failed to rename temp file to: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        emojis = db.emojis.len(),
        "Wrote emoji data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji_db::{load_embedded, parse_database, EMBEDDED_JSON};
    use tempfile::TempDir;

    #[test]
    fn test_export_reproduces_embedded_document() {
        let json = to_json(&to_database()).unwrap();
        assert_eq!(json, EMBEDDED_JSON);
    }

    #[test]
    fn test_to_database_matches_parsed_document() {
        assert_eq!(to_database(), load_embedded().unwrap());
    }

    #[test]
    fn test_glyphs_survive_reload_byte_for_byte() {
        let json = to_json(&to_database()).unwrap();
        let reloaded = parse_database(&json).unwrap();
        for (record, emoji) in reloaded.emojis.iter().zip(Emoji::all()) {
            assert_eq!(record.glyph.as_bytes(), emoji.glyph().as_bytes());
            for (variant, (_, glyph)) in record.skin_tones.iter().zip(emoji.skin_tone_variants()) {
                assert_eq!(variant.glyph.as_bytes(), glyph.as_bytes());
            }
        }
    }

    #[test]
    fn test_write_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("emoji.json");

        write_json(&to_database(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, EMBEDDED_JSON);
        assert!(!path.with_extension("json.tmp").exists());
    }
}
