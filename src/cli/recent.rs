//! Recently used emoji commands.

use crate::cli::common::{print_json, resolve_emoji, CliError, CliResult};
use crate::config::Config;
use crate::emoji_db::EmojiVariant;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage the recently used emoji list
#[derive(Debug, Clone, Args)]
pub struct RecentArgs {
    #[command(subcommand)]
    command: RecentCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum RecentCommand {
    /// List recently used emoji, most recent first
    List(RecentListArgs),
    /// Record a selection
    Add(RecentAddArgs),
    /// Forget every entry
    Clear,
}

/// List recently used emoji
#[derive(Debug, Clone, Args)]
pub struct RecentListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Record a selection
#[derive(Debug, Clone, Args)]
pub struct RecentAddArgs {
    /// Glyph (toned glyphs are kept as-is) or symbolic name
    #[arg(value_name = "EMOJI")]
    emoji: String,
}

#[derive(Debug, Serialize)]
struct RecentItem {
    name: &'static str,
    glyph: EmojiVariant,
}

impl RecentArgs {
    /// Execute recent subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            RecentCommand::List(args) => args.execute(),
            RecentCommand::Add(args) => args.execute(),
            RecentCommand::Clear => clear(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))
}

fn save_config(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))
}

impl RecentListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let items: Vec<RecentItem> = config
            .picker
            .recent
            .ordered()
            .into_iter()
            .map(|variant| RecentItem {
                name: variant.base.name(),
                glyph: variant,
            })
            .collect();

        if self.json {
            return print_json(&items);
        }

        if items.is_empty() {
            println!("No recently used emoji.");
        }
        for (idx, item) in items.iter().enumerate() {
            println!("{:>3}. {}  {}", idx + 1, item.glyph, item.name);
        }
        Ok(())
    }
}

impl RecentAddArgs {
    /// Execute add command
    pub fn execute(&self) -> CliResult<()> {
        let variant = resolve_emoji(&self.emoji)?;
        let mut config = load_config()?;
        config.record_recent(variant);
        save_config(&config)?;
        println!("✓ Recorded {variant}");
        Ok(())
    }
}

fn clear() -> CliResult<()> {
    let mut config = load_config()?;
    config.picker.recent.clear();
    save_config(&config)?;
    println!("✓ Cleared recently used emoji");
    Ok(())
}
