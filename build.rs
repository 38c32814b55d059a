//! Build script for emojidb.
//!
//! Reads the emoji data document and generates the closed `Emoji` enum, the
//! static symbol table and the perfect-hash lookup maps into `OUT_DIR`.

#![allow(dead_code)]

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

include!("src/emoji_db/schema.rs");

static DATA_FILE: &str = "src/emoji_db/emoji.json";

fn main() {
    println!("cargo:rerun-if-changed={DATA_FILE}");
    println!("cargo:rerun-if-changed=src/emoji_db/schema.rs");

    let json = fs::read_to_string(DATA_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {DATA_FILE}: {e}"));
    let db: EmojiDatabase =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("Failed to parse {DATA_FILE}: {e}"));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let path = Path::new(&out_dir).join("emoji_table.rs");
    fs::write(&path, generate(&db))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
}

fn generate(db: &EmojiDatabase) -> String {
    let variants: Vec<String> = db.emojis.iter().map(|e| variant_ident(&e.name)).collect();
    let mut out = String::new();

    writeln!(out, "/// Unicode Emoji version of the compiled table.").unwrap();
    writeln!(
        out,
        "pub const DATA_VERSION: EmojiVersion = {};",
        version_expr(&db.version)
    )
    .unwrap();
    writeln!(out).unwrap();

    // Enum
    writeln!(out, "/// Every symbol of the table, in sort-rank order.").unwrap();
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]"
    )
    .unwrap();
    writeln!(out, "pub enum Emoji {{").unwrap();
    for (record, ident) in db.emojis.iter().zip(&variants) {
        writeln!(out, "    /// {} {}", record.glyph, record.description).unwrap();
        writeln!(out, "    {ident},").unwrap();
    }
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();

    // Table
    writeln!(
        out,
        "static EMOJI_TABLE: [EmojiData; {}] = [",
        db.emojis.len()
    )
    .unwrap();
    for record in &db.emojis {
        let category = record
            .category
            .as_deref()
            .map_or_else(|| "None".to_string(), |id| format!("Some(Category::{})", variant_ident(id)));
        let mut tones = String::new();
        for variant in &record.skin_tones {
            write!(
                tones,
                "({}, {:?}), ",
                skin_tones_expr(&record.name, &variant.tones),
                variant.glyph
            )
            .unwrap();
        }
        writeln!(
            out,
            "    EmojiData {{ name: {:?}, glyph: {:?}, description: {:?}, sort_order: {}, version: {}, category: {category}, subgroup: {:?}, skin_tones: &[{tones}] }},",
            record.name,
            record.glyph,
            record.description,
            record.sort_order,
            version_expr(&record.version),
            record.subgroup,
        )
        .unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();

    // All symbols, and members per category
    writeln!(out, "static ALL_EMOJIS: [Emoji; {}] = [", variants.len()).unwrap();
    for ident in &variants {
        writeln!(out, "    Emoji::{ident},").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();

    for category in &db.categories {
        let members: Vec<&String> = db
            .emojis
            .iter()
            .zip(&variants)
            .filter(|(record, _)| record.category.as_deref() == Some(category.id.as_str()))
            .map(|(_, ident)| ident)
            .collect();
        writeln!(
            out,
            "static {}_MEMBERS: [Emoji; {}] = [{}];",
            screaming_ident(&category.id),
            members.len(),
            members
                .iter()
                .map(|ident| format!("Emoji::{ident}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    // Lookup maps
    let mut names = phf_codegen::Map::new();
    let mut glyphs = phf_codegen::Map::new();
    let mut seen_glyphs = HashSet::new();
    for (record, ident) in db.emojis.iter().zip(&variants) {
        names.entry(record.name.as_str(), &format!("Emoji::{ident}"));
        assert!(
            seen_glyphs.insert(record.glyph.as_str()),
            "Duplicate glyph for {}",
            record.name
        );
        glyphs.entry(record.glyph.as_str(), &format!("(Emoji::{ident}, None)"));
        for variant in &record.skin_tones {
            assert!(
                seen_glyphs.insert(variant.glyph.as_str()),
                "Duplicate variant glyph for {}",
                record.name
            );
            glyphs.entry(
                variant.glyph.as_str(),
                &format!(
                    "(Emoji::{ident}, Some({}))",
                    skin_tones_expr(&record.name, &variant.tones)
                ),
            );
        }
    }
    writeln!(
        out,
        "static NAME_MAP: phf::Map<&'static str, Emoji> = {};",
        names.build()
    )
    .unwrap();
    writeln!(
        out,
        "static GLYPH_MAP: phf::Map<&'static str, (Emoji, Option<SkinTones>)> = {};",
        glyphs.build()
    )
    .unwrap();

    out
}

/// "thumbsUpSign" -> "ThumbsUpSign"
fn variant_ident(name: &str) -> String {
    assert!(
        !name.is_empty()
            && name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric()),
        "Symbolic name is not a valid identifier: {name:?}"
    );
    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default()
}

/// "smileysAndEmotion" -> "SMILEYS_AND_EMOTION"
fn screaming_ident(id: &str) -> String {
    let mut out = String::new();
    for c in id.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

fn version_expr(version: &str) -> String {
    let (major, minor) = version.split_once('.').unwrap_or((version, "0"));
    let major: u8 = major
        .parse()
        .unwrap_or_else(|_| panic!("Invalid emoji version: {version:?}"));
    let minor: u8 = minor
        .parse()
        .unwrap_or_else(|_| panic!("Invalid emoji version: {version:?}"));
    format!("EmojiVersion::new({major}, {minor})")
}

fn tone_expr(name: &str, tone: &str) -> &'static str {
    match tone {
        "light" => "SkinTone::Light",
        "mediumLight" => "SkinTone::MediumLight",
        "medium" => "SkinTone::Medium",
        "mediumDark" => "SkinTone::MediumDark",
        "dark" => "SkinTone::Dark",
        other => panic!("Unknown skin tone {other:?} in {name}"),
    }
}

fn skin_tones_expr(name: &str, tones: &[String]) -> String {
    match tones {
        [single] => format!("SkinTones::Single({})", tone_expr(name, single)),
        [first, second] => format!(
            "SkinTones::Pair({}, {})",
            tone_expr(name, first),
            tone_expr(name, second)
        ),
        _ => panic!("Skin tone key of {name} must hold one or two tones, got {tones:?}"),
    }
}
