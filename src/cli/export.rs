//! Export command.

use crate::cli::common::{CliError, CliResult};
use crate::export::{to_database, to_json, write_json};
use clap::Args;
use std::path::PathBuf;

/// Write the built-in table as an emoji.json document
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let db = to_database();

        match &self.output {
            Some(path) => {
                write_json(&db, path).map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("✓ Exported {} emoji to {}", db.emojis.len(), path.display());
            }
            None => {
                let json = to_json(&db).map_err(|e| CliError::io(format!("{e:#}")))?;
                print!("{json}");
            }
        }
        Ok(())
    }
}
