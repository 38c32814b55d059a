//! Categories command.

use crate::cli::common::{print_json, CliResult};
use crate::emoji_db::Category;
use clap::Args;
use serde::Serialize;

/// List the picker categories
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryItem {
    id: &'static str,
    name: &'static str,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories: Vec<CategoryItem> = Category::ALL
            .iter()
            .map(|c| CategoryItem {
                id: c.id(),
                name: c.display_name(),
                count: c.emojis().len(),
            })
            .collect();

        if self.json {
            return print_json(&categories);
        }

        for item in &categories {
            println!("{:<20} {:<20} {:>5}", item.id, item.name, item.count);
        }
        Ok(())
    }
}
