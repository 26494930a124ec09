//! One sequential pass over the species catalog.
//!
//! The index is fetched once; entries are processed strictly in index order
//! and each species' moves in record order, so move ids depend only on the
//! data and never on timing. A detail record that cannot be fetched or has
//! no type is skipped without consuming a species id or registering any of
//! its moves. Only an unusable index aborts the walk.

use pokedex_core::{MoveRegistry, SpeciesRow, category};

use crate::error::ScrapeError;
use crate::log::{WalkEntry, WalkLog};
use crate::source::CatalogSource;
use crate::types::{IndexEntry, SpeciesDetail};

/// Progress callbacks emitted during a walk.
#[derive(Debug, Clone)]
pub enum WalkProgress {
    /// Index fetched.
    IndexLoaded { total: usize },
    /// About to fetch a detail record.
    Fetching {
        name: String,
        index: usize,
        total: usize,
    },
    /// Species row created.
    Exported { id: u32, name: String },
    /// Entry skipped.
    Skipped { name: String, reason: String },
    /// All entries processed.
    Done,
}

/// Result of a completed walk.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Species rows in discovery order.
    pub species: Vec<SpeciesRow>,
    pub log: WalkLog,
}

/// Walk the whole catalog.
///
/// Moves are registered into `registry`, which the caller owns and flushes
/// afterwards.
pub fn walk<S: CatalogSource>(
    source: &S,
    registry: &mut MoveRegistry,
    progress: &dyn Fn(WalkProgress),
) -> Result<WalkOutcome, ScrapeError> {
    let index = source
        .fetch_index()
        .map_err(|e| match e {
            ScrapeError::Index(_) => e,
            other => ScrapeError::index(other.to_string()),
        })?;
    let entries = index
        .results
        .ok_or_else(|| ScrapeError::index("response has no 'results' field"))?;

    let total = entries.len();
    log::info!("Species index lists {total} entries");
    progress(WalkProgress::IndexLoaded { total });

    let mut outcome = WalkOutcome::default();
    let mut next_id: u32 = 1;

    for (i, entry) in entries.iter().enumerate() {
        progress(WalkProgress::Fetching {
            name: entry.name.clone(),
            index: i,
            total,
        });

        let classified = fetch_detail_record(source, entry).and_then(|detail| {
            classify(next_id, entry, &detail, registry)
                .ok_or_else(|| "no types listed".to_string())
        });
        let row = match classified {
            Ok(row) => row,
            Err(reason) => {
                log::debug!("Skipping {}: {reason}", entry.name);
                progress(WalkProgress::Skipped {
                    name: entry.name.clone(),
                    reason: reason.clone(),
                });
                outcome.log.add(WalkEntry::Skipped {
                    name: entry.name.clone(),
                    reason,
                });
                continue;
            }
        };
        next_id += 1;

        log::debug!(
            "#{} {} -> {} ({} moves)",
            row.id,
            row.name,
            row.category,
            row.move_ids.len()
        );
        progress(WalkProgress::Exported {
            id: row.id,
            name: row.name.clone(),
        });
        outcome.log.add(WalkEntry::Exported {
            id: row.id,
            name: row.name.clone(),
            category: row.category.clone(),
            move_count: row.move_ids.len(),
        });
        outcome.species.push(row);
    }

    progress(WalkProgress::Done);
    Ok(outcome)
}

/// Fetch a detail record. The error is a human-readable skip reason.
fn fetch_detail_record<S: CatalogSource>(
    source: &S,
    entry: &IndexEntry,
) -> Result<SpeciesDetail, String> {
    match source.fetch_detail(entry) {
        Ok(Some(detail)) => Ok(detail),
        Ok(None) => Err("empty detail record".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Build the row for one species, registering its moves in record order.
///
/// Returns `None` (and registers nothing) when the record has no type.
pub fn classify(
    id: u32,
    entry: &IndexEntry,
    detail: &SpeciesDetail,
    registry: &mut MoveRegistry,
) -> Option<SpeciesRow> {
    let raw_type = detail.primary_type()?;
    let label = category::resolve(&raw_type);

    let move_ids = detail
        .move_names()
        .map(|name| registry.register_and_get_id(name))
        .collect();

    Some(SpeciesRow {
        id,
        name: entry.name.clone(),
        category: label.to_string(),
        move_ids,
    })
}

#[cfg(test)]
#[path = "tests/walk_tests.rs"]
mod tests;
