//! Integrity checks for emoji data documents.
//!
//! The compiled table is generated from `emoji.json`, so these checks guard
//! the document before it is committed or after an import.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use crate::emoji_db::{
    Category, EmojiDatabase, EmojiRecord, EmojiVersion, SkinTone, SkinTones, REPLACEMENT_GLYPH,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Result of an integrity check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    /// Problems that make the document unusable
    pub errors: Vec<IntegrityError>,
    /// Suspicious but accepted content
    pub warnings: Vec<IntegrityWarning>,
}

impl IntegrityReport {
    /// Creates a new empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, kind: IntegrityErrorKind, emoji: Option<&str>, message: impl Into<String>) {
        self.errors.push(IntegrityError {
            kind,
            emoji: emoji.map(str::to_string),
            message: message.into(),
        });
    }

    fn warn(&mut self, emoji: Option<&str>, message: impl Into<String>) {
        self.warnings.push(IntegrityWarning {
            emoji: emoji.map(str::to_string),
            message: message.into(),
        });
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("✗ {} integrity errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("⚠ {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Integrity error with the offending symbol.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityError {
    /// Type of error
    pub kind: IntegrityErrorKind,
    /// Symbolic name, if the error concerns one symbol
    pub emoji: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.emoji {
            Some(name) => write!(f, "[{}] {}: {}", name, self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Types of integrity errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityErrorKind {
    /// Sort ranks are not exactly 0..N-1
    SortOrder,
    /// Symbolic name repeated or not an identifier
    Name,
    /// Glyph empty, repeated or not byte-stable
    Glyph,
    /// Version unparseable or newer than the document
    Version,
    /// Unknown or misordered category
    Category,
    /// Malformed skin-tone variant
    SkinTone,
}

impl std::fmt::Display for IntegrityErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SortOrder => write!(f, "Sort Order"),
            Self::Name => write!(f, "Name"),
            Self::Glyph => write!(f, "Glyph"),
            Self::Version => write!(f, "Version"),
            Self::Category => write!(f, "Category"),
            Self::SkinTone => write!(f, "Skin Tone"),
        }
    }
}

/// Non-blocking finding.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityWarning {
    /// Symbolic name, if the warning concerns one symbol
    pub emoji: Option<String>,
    /// Warning message
    pub message: String,
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.emoji {
            Some(name) => write!(f, "[{}] {}", name, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Checks a data document.
///
/// Checks:
/// - sort ranks are dense and unique
/// - names are unique identifiers
/// - glyphs are non-empty, unique across bases and variants, and byte-stable
/// - versions parse and do not exceed the document version
/// - the nine categories are present in picker order and every symbol names a known one
/// - tone keys hold one or two known tones matching the modifiers in the variant glyph
#[must_use]
pub fn check(db: &EmojiDatabase) -> IntegrityReport {
    let mut report = IntegrityReport::new();

    let document_version = match db.version.parse::<EmojiVersion>() {
        Ok(version) => Some(version),
        Err(e) => {
            report.error(IntegrityErrorKind::Version, None, e.to_string());
            None
        }
    };

    check_categories(db, &mut report);
    check_sort_order(db, &mut report);

    let mut names = HashSet::new();
    let mut glyphs: HashMap<&str, &str> = HashMap::new();
    for record in &db.emojis {
        let name = record.name.as_str();

        if !is_identifier(name) {
            report.error(
                IntegrityErrorKind::Name,
                Some(name),
                "Name must be an ASCII identifier starting with a lowercase letter",
            );
        }
        if !names.insert(name) {
            report.error(IntegrityErrorKind::Name, Some(name), "Duplicate name");
        }

        check_glyph(&mut report, &mut glyphs, name, &record.glyph);

        match record.version.parse::<EmojiVersion>() {
            Ok(version) => {
                if document_version.is_some_and(|max| version > max) {
                    report.error(
                        IntegrityErrorKind::Version,
                        Some(name),
                        format!("Version {version} is newer than the document ({})", db.version),
                    );
                }
            }
            Err(e) => report.error(IntegrityErrorKind::Version, Some(name), e.to_string()),
        }

        match record.category.as_deref() {
            Some(id) => {
                if Category::from_id(id).is_none() {
                    report.error(
                        IntegrityErrorKind::Category,
                        Some(name),
                        format!("Unknown category '{id}'"),
                    );
                }
                if has_modifier(&record.glyph) {
                    report.error(
                        IntegrityErrorKind::Glyph,
                        Some(name),
                        "Base glyph contains a skin tone modifier",
                    );
                }
            }
            None => {
                if record.subgroup != "skin-tone" && record.subgroup != "hair-style" {
                    report.warn(Some(name), "Symbol has no category");
                }
            }
        }

        if record.description.trim().is_empty() {
            report.warn(Some(name), "Empty description");
        }

        check_skin_tones(&mut report, &mut glyphs, record);
    }

    tracing::debug!(
        emojis = db.emojis.len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Checked emoji data"
    );
    report
}

fn check_categories(db: &EmojiDatabase, report: &mut IntegrityReport) {
    let ids: Vec<&str> = db.categories.iter().map(|c| c.id.as_str()).collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
    if ids != expected {
        report.error(
            IntegrityErrorKind::Category,
            None,
            format!("Categories must be [{}], found [{}]", expected.join(", "), ids.join(", ")),
        );
    }
    for record in &db.categories {
        if let Some(category) = Category::from_id(&record.id) {
            if record.name != category.display_name() {
                report.warn(
                    None,
                    format!(
                        "Category '{}' is named '{}', expected '{}'",
                        record.id,
                        record.name,
                        category.display_name()
                    ),
                );
            }
        }
    }
}

fn check_sort_order(db: &EmojiDatabase, report: &mut IntegrityReport) {
    let count = db.emojis.len();
    let mut seen = vec![false; count];
    for record in &db.emojis {
        match seen.get_mut(record.sort_order) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => report.error(
                IntegrityErrorKind::SortOrder,
                Some(&record.name),
                format!("Duplicate sort order {}", record.sort_order),
            ),
            None => report.error(
                IntegrityErrorKind::SortOrder,
                Some(&record.name),
                format!("Sort order {} is outside 0..{count}", record.sort_order),
            ),
        }
    }
    let missing = seen.iter().filter(|s| !**s).count();
    if missing > 0 {
        report.error(
            IntegrityErrorKind::SortOrder,
            None,
            format!("{missing} sort order values are unused"),
        );
    }

    if db
        .emojis
        .windows(2)
        .any(|w| w[0].sort_order > w[1].sort_order)
    {
        report.warn(None, "Records are not stored in sort order");
    }
}

fn check_glyph<'a>(
    report: &mut IntegrityReport,
    glyphs: &mut HashMap<&'a str, &'a str>,
    name: &'a str,
    glyph: &'a str,
) {
    if glyph.is_empty() {
        report.error(IntegrityErrorKind::Glyph, Some(name), "Empty glyph");
        return;
    }
    if glyph.contains(REPLACEMENT_GLYPH) {
        report.error(
            IntegrityErrorKind::Glyph,
            Some(name),
            "Glyph contains U+FFFD",
        );
    }
    if !is_byte_stable(glyph) {
        report.error(
            IntegrityErrorKind::Glyph,
            Some(name),
            "Glyph does not survive a JSON round trip unchanged",
        );
    }
    if let Some(owner) = glyphs.insert(glyph, name) {
        report.error(
            IntegrityErrorKind::Glyph,
            Some(name),
            format!("Glyph {glyph} is already used by {owner}"),
        );
    }
}

fn check_skin_tones<'a>(
    report: &mut IntegrityReport,
    glyphs: &mut HashMap<&'a str, &'a str>,
    record: &'a EmojiRecord,
) {
    let name = record.name.as_str();
    let mut keys = HashSet::new();

    for variant in &record.skin_tones {
        let tones: Result<Vec<SkinTone>, _> = variant.tones.iter().map(|t| t.parse()).collect();
        let key = match tones.map(|t| SkinTones::from_slice(&t)) {
            Ok(Some(key)) => key,
            Ok(None) => {
                report.error(
                    IntegrityErrorKind::SkinTone,
                    Some(name),
                    format!(
                        "Tone key must hold one or two tones, found {}",
                        variant.tones.len()
                    ),
                );
                continue;
            }
            Err(e) => {
                report.error(IntegrityErrorKind::SkinTone, Some(name), e.to_string());
                continue;
            }
        };

        if !keys.insert(key) {
            report.error(
                IntegrityErrorKind::SkinTone,
                Some(name),
                format!("Duplicate tone key {key}"),
            );
        }
        if variant.glyph == record.glyph {
            report.error(
                IntegrityErrorKind::SkinTone,
                Some(name),
                format!("Variant {key} repeats the base glyph"),
            );
        }

        let modifiers: Vec<SkinTone> = variant
            .glyph
            .chars()
            .filter_map(SkinTone::from_modifier)
            .collect();
        let matches = match key {
            SkinTones::Single(tone) => {
                !modifiers.is_empty() && modifiers.iter().all(|m| *m == tone)
            }
            SkinTones::Pair(first, second) => modifiers == [first, second],
        };
        if !matches {
            report.error(
                IntegrityErrorKind::SkinTone,
                Some(name),
                format!("Variant glyph modifiers do not match tone key {key}"),
            );
        }

        check_glyph(report, glyphs, name, &variant.glyph);
    }
}

fn is_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn has_modifier(glyph: &str) -> bool {
    glyph.chars().any(|c| SkinTone::from_modifier(c).is_some())
}

fn is_byte_stable(glyph: &str) -> bool {
    serde_json::to_string(glyph)
        .ok()
        .and_then(|json| serde_json::from_str::<String>(&json).ok())
        .is_some_and(|back| back.as_bytes() == glyph.as_bytes())
}
