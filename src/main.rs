//! connected-quest CLI
//!
//! Play the digital-safety quiz in the terminal, inspect level packs,
//! or validate a custom pack before handing it to a class.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use connected_quest::content::{builtin_levels, load_pack, validate_levels};
use connected_quest::engine::Session;
use connected_quest::report::{OutputFormat, format_catalog};
use connected_quest::tui;

#[derive(Parser)]
#[command(name = "connected-quest")]
#[command(about = "Terminal quiz game teaching digital-safety skills")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (default levels or a custom pack)
    Play {
        /// JSON level pack to play instead of the built-in levels
        #[arg(long)]
        pack: Option<PathBuf>,
    },

    /// Print the answer-key catalog of a level pack (teacher-facing)
    Levels {
        /// JSON level pack to describe (default: built-in levels)
        #[arg(long)]
        pack: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a custom level pack
    Check {
        /// JSON level pack to check
        pack: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { pack } => cmd_play(pack),
        Commands::Levels { pack, format } => cmd_levels(pack, format.into()),
        Commands::Check { pack } => cmd_check(pack),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// PACK RESOLUTION
// ============================================================================

/// Load and validate the requested pack, or fall back to the built-in
/// levels (which are validated in tests, not on every launch).
fn resolve_levels(pack: Option<PathBuf>) -> Result<Vec<connected_quest::content::Level>, String> {
    match pack {
        None => Ok(builtin_levels()),
        Some(path) => {
            let levels = load_pack(&path)
                .map_err(|e| format!("could not load {}: {}", path.display(), e))?;
            validate_levels(&levels).map_err(|e| format!("invalid pack {}: {}", path.display(), e))?;
            Ok(levels)
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(pack: Option<PathBuf>) -> Result<(), String> {
    let levels = resolve_levels(pack)?;
    let session = Session::new(levels);
    tui::run::run(session).map_err(|e| e.to_string())
}

fn cmd_levels(pack: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let levels = resolve_levels(pack)?;
    print!("{}", format_catalog(&levels, format));
    Ok(())
}

fn cmd_check(pack: PathBuf) -> Result<(), String> {
    let levels =
        load_pack(&pack).map_err(|e| format!("could not load {}: {}", pack.display(), e))?;
    validate_levels(&levels).map_err(|e| format!("invalid pack {}: {}", pack.display(), e))?;

    let items: usize = levels.iter().map(|l| l.items.len()).sum();
    println!(
        "OK: {} level{}, {} items",
        levels.len(),
        if levels.len() == 1 { "" } else { "s" },
        items
    );
    Ok(())
}
