//! Delimited table output for `pokemon.csv` and `attacks.csv`.
//!
//! Fields are written verbatim: no quoting, no escaping. A field containing
//! the delimiter or a line break would corrupt the row, and a `|` inside a
//! single-valued field would read back as several values, so the writer logs
//! a warning when it sees one but still writes the value unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::{MoveEntry, SpeciesRow};

/// Field delimiter.
pub const DELIMITER: u8 = b',';

/// Joins the elements of a multi-valued field.
pub const MULTI_VALUE_SEPARATOR: &str = "|";

pub const SPECIES_FILE: &str = "pokemon.csv";
pub const MOVES_FILE: &str = "attacks.csv";

pub const SPECIES_COLUMNS: &[&str] = &["id", "name", "type", "attack_ids"];
pub const MOVE_COLUMNS: &[&str] = &["id", "name", "power", "type"];

/// A value that can be written as one table line.
pub trait TableRow {
    /// Fields in column order.
    fn fields(&self) -> Vec<String>;

    /// Whether `column` holds values joined with [`MULTI_VALUE_SEPARATOR`].
    fn is_multi_valued(_column: usize) -> bool {
        false
    }
}

impl TableRow for SpeciesRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            join_multi(&self.move_ids),
        ]
    }

    fn is_multi_valued(column: usize) -> bool {
        column == 3
    }
}

impl TableRow for MoveEntry {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.power.to_string(),
            self.category.clone(),
        ]
    }
}

/// Join a multi-valued field with [`MULTI_VALUE_SEPARATOR`]. Empty input
/// yields an empty string.
pub fn join_multi<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(MULTI_VALUE_SEPARATOR)
}

/// Write a header line and one line per row to `path`, replacing any existing
/// file. Parent directories are created as needed. Every row is checked
/// against `columns` before anything touches the disk.
pub fn write_table<R: TableRow>(
    path: &Path,
    columns: &[&str],
    rows: &[R],
) -> Result<(), CoreError> {
    let table = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let fields = row.fields();
        if fields.len() != columns.len() {
            return Err(CoreError::RowShape {
                table,
                expected: columns.len(),
                found: fields.len(),
            });
        }
        for (column, field) in fields.iter().enumerate() {
            if needs_escaping(field, R::is_multi_valued(column)) {
                log::warn!("{table}: field {field:?} contains a separator or line break");
            }
        }
        records.push(fields);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(columns)?;
    for fields in &records {
        writer.write_record(fields)?;
    }

    writer.flush()?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write `pokemon.csv` into `dir`. Returns the path written.
pub fn write_species_table(dir: &Path, rows: &[SpeciesRow]) -> Result<PathBuf, CoreError> {
    let path = dir.join(SPECIES_FILE);
    write_table(&path, SPECIES_COLUMNS, rows)?;
    Ok(path)
}

/// Write `attacks.csv` into `dir`. Returns the path written.
pub fn write_moves_table(dir: &Path, entries: &[MoveEntry]) -> Result<PathBuf, CoreError> {
    let path = dir.join(MOVES_FILE);
    write_table(&path, MOVE_COLUMNS, entries)?;
    Ok(path)
}

/// A multi-valued field may contain the separator; any other field may not.
fn needs_escaping(field: &str, multi_valued: bool) -> bool {
    field.contains(DELIMITER as char)
        || field.contains('\n')
        || field.contains('\r')
        || (!multi_valued && field.contains(MULTI_VALUE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_multi_uses_pipe() {
        assert_eq!(join_multi(&[1u32, 2, 2, 7]), "1|2|2|7");
    }

    #[test]
    fn join_multi_empty_is_empty_string() {
        let empty: [u32; 0] = [];
        assert_eq!(join_multi(&empty), "");
    }

    #[test]
    fn species_fields_in_column_order() {
        let row = SpeciesRow {
            id: 3,
            name: "venusaur".to_string(),
            category: "Plante".to_string(),
            move_ids: vec![4, 1],
        };
        assert_eq!(row.fields(), vec!["3", "venusaur", "Plante", "4|1"]);
    }

    #[test]
    fn move_fields_in_column_order() {
        let entry = MoveEntry::placeholder(9, "Ember");
        assert_eq!(entry.fields(), vec!["9", "Ember", "50", "Normal"]);
    }

    #[test]
    fn needs_escaping_detects_delimiter_and_newlines() {
        assert!(needs_escaping("a,b", false));
        assert!(needs_escaping("a\nb", false));
        assert!(needs_escaping("a,b", true));
        assert!(!needs_escaping("mr-mime", false));
    }

    #[test]
    fn pipe_flagged_only_outside_multi_valued_columns() {
        assert!(needs_escaping("mr|mime", false));
        assert!(!needs_escaping("1|2", true));
    }

    #[test]
    fn only_attack_ids_column_is_multi_valued() {
        let multi: Vec<bool> = (0..SPECIES_COLUMNS.len())
            .map(SpeciesRow::is_multi_valued)
            .collect();
        assert_eq!(multi, vec![false, false, false, true]);
        assert!((0..MOVE_COLUMNS.len()).all(|c| !MoveEntry::is_multi_valued(c)));
    }
}
