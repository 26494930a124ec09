use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::Settings;
use pokedex_scraper::{PokeApiClient, WalkProgress, run_export};

use crate::error::CliError;

fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message("Downloading species index...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn switch_to_bar(pb: &ProgressBar, total: usize) {
    pb.set_length(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );
}

/// Run the build command: walk the catalog and write both tables.
pub(crate) fn run_build(
    settings: &Settings,
    report: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let client = PokeApiClient::new(settings)?;
    log::info!(
        "Fetching species index from {}",
        client.index_url().if_supports_color(Stdout, |t| t.cyan()),
    );

    let pb = progress_bar(quiet);

    let on_progress = |event: WalkProgress| match event {
        WalkProgress::IndexLoaded { total } => switch_to_bar(&pb, total),
        WalkProgress::Fetching { name, .. } => pb.set_message(format!("Fetching {name}...")),
        WalkProgress::Exported { .. } => pb.inc(1),
        WalkProgress::Skipped { name, reason } => {
            pb.suspend(|| {
                log::warn!(
                    "{} Skipped {}: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    name,
                    reason,
                );
            });
            pb.inc(1);
        }
        WalkProgress::Done => pb.finish_and_clear(),
    };

    let result = match run_export(&client, &settings.output_dir, &on_progress) {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    let summary = result.log.summary();
    log::info!(
        "{} Exported {} species ({} skipped), {} distinct moves",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.exported,
        summary.skipped,
        result.moves.len(),
    );
    log::info!(
        "  {}",
        result
            .species_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!(
        "  {}",
        result
            .moves_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan())
    );

    if let Some(path) = report {
        result.log.write_to_file(&path, result.moves.len())?;
        log::info!(
            "Report written to {}",
            path.display().if_supports_color(Stdout, |t| t.cyan())
        );
    }

    Ok(())
}
