//! CLI command handlers for emojidb.
//!
//! This module provides headless, scriptable access to the emoji table, the
//! picker state stored in the configuration, and the data regeneration tools.

pub mod categories;
pub mod common;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod picker;
pub mod reactions;
pub mod recent;
pub mod search;
pub mod show;
pub mod tone;
pub mod validate;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use list::ListArgs;
pub use picker::PickerArgs;
pub use reactions::ReactionsArgs;
pub use recent::RecentArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use tone::ToneArgs;
pub use validate::ValidateArgs;
