use std::path::Path;

/// What happened to one index entry during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    Exported {
        id: u32,
        name: String,
        category: String,
        move_count: usize,
    },
    Skipped {
        name: String,
        reason: String,
    },
}

/// Collects per-entry outcomes of a walk and writes a report file.
#[derive(Debug, Default)]
pub struct WalkLog {
    entries: Vec<WalkEntry>,
}

impl WalkLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: WalkEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[WalkEntry] {
        &self.entries
    }

    pub fn summary(&self) -> WalkSummary {
        let mut summary = WalkSummary::default();
        for entry in &self.entries {
            match entry {
                WalkEntry::Exported { move_count, .. } => {
                    summary.exported += 1;
                    summary.move_references += move_count;
                }
                WalkEntry::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }

    /// Write the report to a file.
    pub fn write_to_file(&self, path: &Path, distinct_moves: usize) -> std::io::Result<()> {
        use std::io::Write;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        let summary = self.summary();

        writeln!(file, "=== Export Report ===")?;
        writeln!(
            file,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(file)?;
        writeln!(file, "--- Summary ---")?;
        writeln!(file, "Species exported: {}", summary.exported)?;
        writeln!(file, "Species skipped: {}", summary.skipped)?;
        writeln!(file, "Distinct moves: {}", distinct_moves)?;
        writeln!(file, "Move references: {}", summary.move_references)?;
        writeln!(file)?;
        writeln!(file, "--- Details ---")?;
        writeln!(file)?;

        for entry in &self.entries {
            match entry {
                WalkEntry::Exported {
                    id,
                    name,
                    category,
                    move_count,
                } => {
                    writeln!(
                        file,
                        "[OK] #{} {} ({}, {} moves)",
                        id, name, category, move_count
                    )?;
                }
                WalkEntry::Skipped { name, reason } => {
                    writeln!(file, "[SKIPPED] {}: {}", name, reason)?;
                }
            }
        }

        file.flush()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    pub exported: usize,
    pub skipped: usize,
    /// Total move ids across all exported species, duplicates included.
    pub move_references: usize,
}
