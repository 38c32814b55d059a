//! Picker command: the picker contents for the configured environment.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::emoji_db::{EmojiVariant, EmojiVersion};
use crate::picker::Picker;
use clap::Args;
use serde::Serialize;

/// Show the picker sections with preferred skin tones applied
#[derive(Debug, Clone, Args)]
pub struct PickerArgs {
    /// Override the configured maximum emoji version
    #[arg(long, value_name = "VERSION")]
    pub max_version: Option<EmojiVersion>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PickerResponse {
    max_version: EmojiVersion,
    recent: Vec<EmojiVariant>,
    sections: Vec<SectionItem>,
}

#[derive(Debug, Serialize)]
struct SectionItem {
    id: &'static str,
    name: &'static str,
    count: usize,
    emojis: Vec<EmojiVariant>,
}

impl PickerArgs {
    /// Execute the picker command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let max_version = self
            .max_version
            .unwrap_or(config.picker.max_emoji_version);
        if max_version > EmojiVersion::CURRENT {
            return Err(CliError::validation(format!(
                "Max emoji version {max_version} is newer than the emoji table ({})",
                EmojiVersion::CURRENT
            )));
        }

        let picker = Picker::new(max_version, &config.skin_tones, &config.picker.recent);
        let response = PickerResponse {
            max_version,
            recent: picker.recent(),
            sections: picker
                .sections()
                .into_iter()
                .map(|section| SectionItem {
                    id: section.category.id(),
                    name: section.category.display_name(),
                    count: section.emojis.len(),
                    emojis: section.emojis,
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Emoji picker (up to Emoji {})", response.max_version);
        if !response.recent.is_empty() {
            println!();
            println!("Recently used:");
            print_glyphs(&response.recent);
        }
        for section in &response.sections {
            println!();
            println!("{} ({}):", section.name, section.count);
            print_glyphs(&section.emojis);
        }
        Ok(())
    }
}

fn print_glyphs(variants: &[EmojiVariant]) {
    for chunk in variants.chunks(20) {
        let line: Vec<&str> = chunk.iter().map(EmojiVariant::raw_value).collect();
        println!("  {}", line.join(" "));
    }
}
