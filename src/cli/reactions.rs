//! Reactions command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::emoji_db::EmojiVariant;
use crate::picker::{base_reactions, default_reactions, LegacyReaction};
use clap::Args;
use serde::Serialize;

/// Show the quick-reaction emoji with preferred skin tones applied
#[derive(Debug, Clone, Args)]
pub struct ReactionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ReactionItem {
    name: &'static str,
    glyph: EmojiVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy: Option<LegacyReaction>,
}

#[derive(Debug, Serialize)]
struct ReactionsResponse {
    base: Vec<ReactionItem>,
    default: Vec<ReactionItem>,
}

impl ReactionsArgs {
    /// Execute the reactions command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let response = ReactionsResponse {
            base: items(base_reactions(&config.skin_tones)),
            default: items(default_reactions(&config.skin_tones)),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Base reactions:");
        for item in &response.base {
            match item.legacy {
                Some(legacy) => println!("  {}  {} ({legacy:?})", item.glyph, item.name),
                None => println!("  {}  {}", item.glyph, item.name),
            }
        }
        println!("Default reactions:");
        for item in &response.default {
            println!("  {}  {}", item.glyph, item.name);
        }
        Ok(())
    }
}

fn items(variants: Vec<EmojiVariant>) -> Vec<ReactionItem> {
    variants
        .into_iter()
        .map(|variant| ReactionItem {
            name: variant.base.name(),
            glyph: variant,
            legacy: variant.base.legacy_reaction(),
        })
        .collect()
}
