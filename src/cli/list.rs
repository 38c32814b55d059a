//! List command.

use crate::cli::common::{print_json, print_row, CliResult, EmojiSummary};
use crate::emoji_db::{Category, Emoji, EmojiVersion};
use clap::Args;
use serde::Serialize;

/// List symbols in sort-rank order
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only list members of this category (e.g., peopleAndBody)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<Category>,

    /// Hide symbols introduced after this emoji version (e.g., 13.1)
    #[arg(long, value_name = "VERSION")]
    pub max_version: Option<EmojiVersion>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    count: usize,
    emojis: Vec<EmojiSummary>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let source: &[Emoji] = match self.category {
            Some(category) => category.emojis(),
            None => Emoji::all(),
        };
        let emojis: Vec<Emoji> = source
            .iter()
            .copied()
            .filter(|e| self.max_version.is_none_or(|max| e.is_available(max)))
            .collect();

        if self.json {
            let response = ListResponse {
                count: emojis.len(),
                emojis: emojis.into_iter().map(EmojiSummary::from).collect(),
            };
            return print_json(&response);
        }

        for emoji in &emojis {
            print_row(*emoji);
        }
        println!();
        println!("{} emoji", emojis.len());
        Ok(())
    }
}
