use std::path::{Path, PathBuf};

use pokedex_core::{MoveEntry, MoveRegistry, SpeciesRow, write_moves_table, write_species_table};

use crate::error::ScrapeError;
use crate::log::WalkLog;
use crate::source::CatalogSource;
use crate::walk::{WalkProgress, walk};

/// Files written by a completed export.
#[derive(Debug)]
pub struct ExportResult {
    pub species: Vec<SpeciesRow>,
    pub moves: Vec<MoveEntry>,
    pub log: WalkLog,
    pub species_path: PathBuf,
    pub moves_path: PathBuf,
}

/// Walk the catalog with a fresh registry, then write `pokemon.csv` and
/// `attacks.csv` into `output_dir`.
///
/// Nothing is written if the walk fails.
pub fn run_export<S: CatalogSource>(
    source: &S,
    output_dir: &Path,
    progress: &dyn Fn(WalkProgress),
) -> Result<ExportResult, ScrapeError> {
    let mut registry = MoveRegistry::new();
    let outcome = walk(source, &mut registry, progress)?;

    let species_path = write_species_table(output_dir, &outcome.species)?;
    log::info!(
        "Wrote {} species to {}",
        outcome.species.len(),
        species_path.display()
    );

    let moves_path = write_moves_table(output_dir, registry.entries())?;
    log::info!("Wrote {} moves to {}", registry.len(), moves_path.display());

    Ok(ExportResult {
        species: outcome.species,
        moves: registry.into_entries(),
        log: outcome.log,
        species_path,
        moves_path,
    })
}
