//! emojidb - Unicode emoji table for pickers
//!
//! Command-line access to the compiled emoji table: listing, lookup, skin-tone
//! variants, picker contents, and regeneration of the data document.

use clap::{Parser, Subcommand};
use emojidb::cli::{
    CategoriesArgs, CliResult, ConfigArgs, ExportArgs, ImportArgs, ListArgs, PickerArgs,
    ReactionsArgs, RecentArgs, SearchArgs, ShowArgs, ToneArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// emojidb - Unicode emoji table with skin tones, versions and picker categories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List symbols in sort-rank order
    List(ListArgs),
    /// Show a symbol with all of its skin-tone variants
    Show(ShowArgs),
    /// Search symbols by name, description, glyph or subgroup
    Search(SearchArgs),
    /// Look up the glyph of a symbol for one or two skin tones
    Tone(ToneArgs),
    /// List the picker categories
    Categories(CategoriesArgs),
    /// Show the picker sections with preferred skin tones applied
    Picker(PickerArgs),
    /// Show the quick-reaction emoji
    Reactions(ReactionsArgs),
    /// Manage the recently used emoji list
    Recent(RecentArgs),
    /// Check an emoji data document
    Validate(ValidateArgs),
    /// Write the built-in table as an emoji.json document
    Export(ExportArgs),
    /// Build an emoji.json document from a Unicode emoji-test.txt file
    Import(ImportArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Search(args) => args.execute(),
            Self::Tone(args) => args.execute(),
            Self::Categories(args) => args.execute(),
            Self::Picker(args) => args.execute(),
            Self::Reactions(args) => args.execute(),
            Self::Recent(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Import(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
