//! Skin-tone lookup command.

use crate::cli::common::{print_json, resolve_emoji, CliError, CliResult};
use crate::emoji_db::{SkinTone, SkinTones};
use clap::Args;
use serde::Serialize;

/// Look up the glyph of a symbol for one or two skin tones
#[derive(Debug, Clone, Args)]
pub struct ToneArgs {
    /// Symbolic name (e.g., handshake) or glyph
    #[arg(value_name = "EMOJI")]
    pub emoji: String,

    /// First tone (light, mediumLight, medium, mediumDark, dark)
    #[arg(value_name = "TONE")]
    pub first: SkinTone,

    /// Second tone, for two-person symbols
    #[arg(value_name = "TONE")]
    pub second: Option<SkinTone>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ToneResponse {
    name: &'static str,
    tones: SkinTones,
    glyph: &'static str,
}

impl ToneArgs {
    /// Execute the tone command
    pub fn execute(&self) -> CliResult<()> {
        let emoji = resolve_emoji(&self.emoji)?.base;
        let key = match self.second {
            Some(second) => SkinTones::Pair(self.first, second),
            None => SkinTones::Single(self.first),
        };

        let Some(glyph) = emoji.skin_tone_variant(key) else {
            let available: Vec<String> = emoji
                .skin_tone_variants()
                .iter()
                .map(|(k, _)| k.to_string())
                .collect();
            let hint = if available.is_empty() {
                "it has no skin tone variants".to_string()
            } else {
                format!("available: {}", available.join(" | "))
            };
            return Err(CliError::validation(format!(
                "'{}' has no variant for '{}' ({})",
                emoji.name(),
                key,
                hint
            )));
        };

        if self.json {
            return print_json(&ToneResponse {
                name: emoji.name(),
                tones: key,
                glyph,
            });
        }

        println!("{glyph}");
        Ok(())
    }
}
