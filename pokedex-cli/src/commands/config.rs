use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::Settings;

use crate::error::CliError;

/// Show the effective settings and the file they were read from.
pub(crate) fn run_config_show(config: Option<&Path>, settings: &Settings) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Export Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let path = config
        .map(Path::to_path_buf)
        .or_else(pokedex_core::settings_path);
    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Settings file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    for line in settings.to_toml()?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(config: Option<&Path>) -> Result<(), CliError> {
    let path = config
        .map(Path::to_path_buf)
        .or_else(pokedex_core::settings_path)
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    println!("{}", path.display());
    Ok(())
}
