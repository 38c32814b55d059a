//! Validate command: integrity check of an emoji data document.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::emoji_db::{load_embedded, parse_database};
use crate::validate::{check, IntegrityError, IntegrityWarning};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check an emoji data document (defaults to the built-in one)
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to an emoji.json document
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidateResponse<'a> {
    valid: bool,
    source: String,
    emojis: usize,
    errors: &'a [IntegrityError],
    warnings: &'a [IntegrityWarning],
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let (db, source) = match &self.file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    CliError::io(format!("Failed to read {}: {e}", path.display()))
                })?;
                let db = parse_database(&content)
                    .map_err(|e| CliError::validation(format!("{}: {e:#}", path.display())))?;
                (db, path.display().to_string())
            }
            None => (
                load_embedded().map_err(|e| CliError::validation(format!("{e:#}")))?,
                "built-in".to_string(),
            ),
        };

        let report = check(&db);

        if self.json {
            print_json(&ValidateResponse {
                valid: report.is_valid(),
                source,
                emojis: db.emojis.len(),
                errors: &report.errors,
                warnings: &report.warnings,
            })?;
        } else if report.is_valid() {
            println!("✓ {} emoji in {} are valid", db.emojis.len(), source);
            if !report.warnings.is_empty() {
                print!("{}", report.format_message());
            }
        } else {
            print!("{}", report.format_message());
        }

        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Validation failed with {} errors",
                report.errors.len()
            )));
        }
        Ok(())
    }
}
