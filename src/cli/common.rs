//! Shared CLI types: errors, exit codes and output helpers.

use crate::emoji_db::{Emoji, EmojiVariant};
use serde::Serialize;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or failed check
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or failed check (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Resolves a symbolic name or any glyph of the table.
pub fn resolve_emoji(input: &str) -> CliResult<EmojiVariant> {
    let input = input.trim();
    Emoji::from_name(input)
        .map(EmojiVariant::plain)
        .or_else(|| EmojiVariant::from_glyph(input))
        .ok_or_else(|| {
            CliError::validation(format!(
                "Unknown emoji '{input}'. Use a symbolic name (e.g., thumbsUpSign) or a glyph"
            ))
        })
}

/// Summary of one symbol for list and search output.
#[derive(Debug, Serialize)]
pub struct EmojiSummary {
    /// Symbolic name
    pub name: &'static str,
    /// Base glyph
    pub glyph: &'static str,
    /// CLDR short name
    pub description: &'static str,
    /// Category ID, absent for components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    /// Display rank
    pub sort_order: u16,
    /// Introduction version
    pub version: String,
    /// Number of tabulated skin-tone variants
    pub skin_tone_variants: usize,
}

impl From<Emoji> for EmojiSummary {
    fn from(emoji: Emoji) -> Self {
        Self {
            name: emoji.name(),
            glyph: emoji.glyph(),
            description: emoji.description(),
            category: emoji.category().map(|c| c.id()),
            sort_order: emoji.sort_order(),
            version: emoji.version().to_string(),
            skin_tone_variants: emoji.skin_tone_variants().len(),
        }
    }
}

/// Prints one symbol as a table row.
pub fn print_row(emoji: Emoji) {
    println!(
        "{:>5}  {}  {:<40} {:<6} {}",
        emoji.sort_order(),
        emoji.glyph(),
        emoji.name(),
        emoji.version().to_string(),
        emoji.description()
    );
}
