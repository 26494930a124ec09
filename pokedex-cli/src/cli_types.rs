//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pokedex_core::SettingsOverrides;

#[derive(Parser)]
#[command(name = "pokedex-export")]
#[command(about = "Export the PokeAPI species catalog to flat CSV tables", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (default: ~/.config/pokedex-export/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values that override the settings file for a single run.
#[derive(Args, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Directory for pokemon.csv and attacks.csv (default: data)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// API root (default: https://pokeapi.co/api/v2)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of species requested from the index (default: 20000)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Per-request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl From<SourceArgs> for SettingsOverrides {
    fn from(args: SourceArgs) -> Self {
        Self {
            base_url: args.base_url,
            index_limit: args.limit,
            output_dir: args.output_dir,
            timeout_secs: args.timeout,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch the catalog and write pokemon.csv and attacks.csv
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Also write a per-species report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List the type keys and their labels
    Types,

    /// Inspect export settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where they came from
    Show,

    /// Print the settings file path
    Path,
}
