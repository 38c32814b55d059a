//! Import command: regenerate emoji.json from Unicode emoji-test.txt.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::emoji_db::{load_embedded, parse_database};
use crate::export::{to_json, write_json};
use crate::import::{parse_emoji_test, ImportSummary};
use crate::validate::check;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Build an emoji.json document from a Unicode emoji-test.txt file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path to emoji-test.txt
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Existing document whose symbolic names are kept (defaults to the built-in one)
    #[arg(long, value_name = "FILE")]
    pub names_from: Option<PathBuf>,

    /// Output file (prints the document to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the import summary as JSON (requires --output)
    #[arg(long, requires = "output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ImportResponse<'a> {
    output: String,
    version: &'a str,
    #[serde(flatten)]
    summary: &'a ImportSummary,
    warnings: usize,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let text = read(&self.input)?;

        let existing = match &self.names_from {
            Some(path) => parse_database(&read(path)?)
                .map_err(|e| CliError::validation(format!("{}: {e:#}", path.display())))?,
            None => load_embedded().map_err(|e| CliError::validation(format!("{e:#}")))?,
        };

        let import = parse_emoji_test(&text, &existing)
            .map_err(|e| CliError::validation(format!("{}: {e:#}", self.input.display())))?;

        let report = check(&import.database);
        if !report.is_valid() {
            eprint!("{}", report.format_message());
            return Err(CliError::validation(format!(
                "Imported document failed validation with {} errors",
                report.errors.len()
            )));
        }

        let Some(path) = &self.output else {
            let json = to_json(&import.database).map_err(|e| CliError::io(format!("{e:#}")))?;
            print!("{json}");
            return Ok(());
        };

        write_json(&import.database, path).map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            return print_json(&ImportResponse {
                output: path.display().to_string(),
                version: &import.database.version,
                summary: &import.summary,
                warnings: report.warnings.len(),
            });
        }

        let summary = &import.summary;
        println!(
            "✓ Imported {} emoji (Emoji {}) to {}",
            summary.emojis,
            import.database.version,
            path.display()
        );
        println!("  Skin tone variants: {}", summary.skin_tone_variants);
        println!("  Names kept:         {}", summary.kept_names);
        println!("  Names generated:    {}", summary.new_names);
        println!("  Lines skipped:      {}", summary.skipped);
        if summary.orphaned > 0 {
            println!("⚠ {} toned lines had no base symbol", summary.orphaned);
        }
        if !report.warnings.is_empty() {
            print!("{}", report.format_message());
        }
        Ok(())
    }
}

fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))
}
