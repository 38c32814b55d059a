//! Configuration management CLI commands.

use crate::cli::common::{print_json, resolve_emoji, CliError, CliResult};
use crate::config::Config;
use crate::emoji_db::{EmojiVersion, SkinTones};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Newest emoji version the rendering environment supports (e.g., 13.1)
    #[arg(long, value_name = "VERSION")]
    max_version: Option<EmojiVersion>,

    /// Preferred skin tones for a symbol (e.g., thumbsUpSign=medium or handshake=light,dark)
    #[arg(long, value_name = "EMOJI=TONES")]
    skin_tone: Vec<String>,

    /// Remove the preferred skin tones of a symbol
    #[arg(long, value_name = "EMOJI")]
    clear_skin_tone: Vec<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    picker: PickerOutput,
    skin_tones: Vec<SkinToneOutput>,
}

#[derive(Serialize, Debug)]
struct PickerOutput {
    max_emoji_version: EmojiVersion,
    recent: usize,
}

#[derive(Serialize, Debug)]
struct SkinToneOutput {
    name: &'static str,
    tones: SkinTones,
    glyph: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.max_version.is_none() && self.skin_tone.is_empty() && self.clear_skin_tone.is_empty()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --max-version, --skin-tone, or --clear-skin-tone",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(version) = self.max_version {
            config
                .set_max_emoji_version(version)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        for name in &self.clear_skin_tone {
            let emoji = resolve_emoji(name)?.base;
            if config.skin_tones.remove(emoji).is_none() {
                tracing::debug!(emoji = emoji.name(), "No skin tone preference to clear");
            }
        }

        for assignment in &self.skin_tone {
            let (name, tones) = assignment.split_once('=').ok_or_else(|| {
                CliError::validation(format!(
                    "Invalid skin tone assignment '{assignment}'. Expected EMOJI=TONE or EMOJI=TONE,TONE"
                ))
            })?;
            let emoji = resolve_emoji(name)?.base;
            let tones: SkinTones = tones
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config
                .set_skin_tone(emoji, tones)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        picker: PickerOutput {
            max_emoji_version: config.picker.max_emoji_version,
            recent: config.picker.recent.len(),
        },
        skin_tones: config
            .skin_tones
            .iter()
            .map(|(emoji, tones)| SkinToneOutput {
                name: emoji.name(),
                tones,
                glyph: config.skin_tones.preferred_variant(emoji).to_string(),
            })
            .collect(),
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("emojidb Configuration");
    println!("=====================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Picker:");
    println!("  Max Emoji Version: {}", config.picker.max_emoji_version);
    println!("  Recent Emoji:      {}", config.picker.recent.len());
    println!();

    println!("Skin Tones:");
    if config.skin_tones.is_empty() {
        println!("  (none)");
    }
    for (emoji, tones) in config.skin_tones.iter() {
        println!(
            "  {}  {} = {}",
            config.skin_tones.preferred_variant(emoji),
            emoji.name(),
            tones
        );
    }
    println!();
}
