//! Search command.

use crate::cli::common::{print_json, print_row, CliResult, EmojiSummary};
use crate::emoji_db::{search, search_in_category, Category};
use clap::Args;
use serde::Serialize;

/// Search symbols by name, description, glyph or subgroup
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search text (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict results to one category
    #[arg(short, long, value_name = "ID")]
    pub category: Option<Category>,

    /// Maximum number of results
    #[arg(short, long, default_value = "25")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    count: usize,
    results: Vec<EmojiSummary>,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let mut results = match self.category {
            Some(category) => search_in_category(&self.query, category),
            None => search(&self.query),
        };
        results.truncate(self.limit);

        if self.json {
            let response = SearchResponse {
                query: &self.query,
                count: results.len(),
                results: results.into_iter().map(EmojiSummary::from).collect(),
            };
            return print_json(&response);
        }

        if results.is_empty() {
            println!("No emoji match '{}'", self.query);
            return Ok(());
        }
        for emoji in results {
            print_row(emoji);
        }
        Ok(())
    }
}
