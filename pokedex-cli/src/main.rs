//! pokedex-export CLI
//!
//! Downloads the PokeAPI species catalog and writes `pokemon.csv` and
//! `attacks.csv`.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::{Settings, SettingsOverrides};

use cli_types::{Cli, Commands, ConfigAction, SourceArgs};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();

    let command = cli.command.unwrap_or(Commands::Build {
        source: SourceArgs::default(),
        report: None,
    });

    match command {
        Commands::Build { source, report } => {
            let settings =
                Settings::load(config)?.with_overrides(SettingsOverrides::from(source));
            commands::build::run_build(&settings, report, cli.quiet)
        }
        Commands::Types => {
            commands::types::run_types();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = Settings::load(config)?;
                commands::config::run_config_show(config, &settings)
            }
            ConfigAction::Path => commands::config::run_config_path(config),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_config(config: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["pokedex-export", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn broken_settings() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "index_limit = \"lots\"\n[[[").unwrap();
        (dir, path)
    }

    #[test]
    fn types_ignores_broken_settings() {
        let (_dir, path) = broken_settings();
        assert!(run(cli_with_config(&path, &["types"])).is_ok());
    }

    #[test]
    fn config_path_ignores_broken_settings() {
        let (_dir, path) = broken_settings();
        assert!(run(cli_with_config(&path, &["config", "path"])).is_ok());
    }

    #[test]
    fn config_show_reports_broken_settings() {
        let (_dir, path) = broken_settings();
        let err = run(cli_with_config(&path, &["config", "show"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
