//! Show command: every attribute of one symbol.

use crate::cli::common::{print_json, resolve_emoji, CliResult};
use crate::picker::LegacyReaction;
use clap::Args;
use serde::Serialize;

/// Show a symbol with all of its skin-tone variants
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Symbolic name (e.g., thumbsUpSign) or glyph
    #[arg(value_name = "EMOJI")]
    pub emoji: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    name: &'static str,
    glyph: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    subgroup: &'static str,
    sort_order: u16,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_tones: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy_reaction: Option<LegacyReaction>,
    skin_tones: Vec<VariantItem>,
}

#[derive(Debug, Serialize)]
struct VariantItem {
    tones: Vec<&'static str>,
    glyph: &'static str,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let variant = resolve_emoji(&self.emoji)?;
        let emoji = variant.base;

        let response = ShowResponse {
            name: emoji.name(),
            glyph: emoji.glyph(),
            description: emoji.description(),
            category: emoji.category().map(|c| c.id()),
            subgroup: emoji.subgroup(),
            sort_order: emoji.sort_order(),
            version: emoji.version().to_string(),
            selected_tones: variant
                .skin_tones
                .map(|key| key.tones().into_iter().map(|t| t.id()).collect()),
            legacy_reaction: emoji.legacy_reaction(),
            skin_tones: emoji
                .skin_tone_variants()
                .iter()
                .map(|&(key, glyph)| VariantItem {
                    tones: key.tones().into_iter().map(|t| t.id()).collect(),
                    glyph,
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{}  {}", response.glyph, response.name);
        println!("Description: {}", response.description);
        match emoji.category() {
            Some(category) => println!("Category:    {} ({})", category.display_name(), category),
            None => println!("Category:    (component)"),
        }
        println!("Subgroup:    {}", response.subgroup);
        println!("Sort order:  {}", response.sort_order);
        println!("Version:     {}", response.version);
        if let Some(key) = variant.skin_tones {
            println!("Selected:    {} ({})", variant.raw_value(), key);
        }
        if let Some(reaction) = response.legacy_reaction {
            println!("Legacy:      {reaction:?}");
        }

        if emoji.has_skin_tone_options() {
            println!();
            println!("Skin tones ({}):", response.skin_tones.len());
            for (key, glyph) in emoji.skin_tone_variants() {
                println!("  {glyph}  {key}");
            }
        } else {
            println!("Skin tones:  none");
        }

        Ok(())
    }
}
