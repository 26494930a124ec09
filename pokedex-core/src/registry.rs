//! Move registry: case-insensitive deduplication of move names with
//! sequential id allocation.
//!
//! Ids are handed out in first-encounter order starting at 1. The registry
//! owns every [`MoveEntry`]; nothing else creates or mutates them.

use std::collections::HashMap;

use crate::types::MoveEntry;

/// Deduplicates move names and assigns stable ids.
#[derive(Debug, Default)]
pub struct MoveRegistry {
    /// Lower-cased name -> id.
    by_key: HashMap<String, u32>,
    /// Entries in id order; `entries[i].id == i + 1`.
    entries: Vec<MoveEntry>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it if this is the first time it
    /// has been seen (compared case-insensitively).
    ///
    /// The stored name keeps the casing of the first encounter.
    pub fn register_and_get_id(&mut self, name: &str) -> u32 {
        let key = normalize(name);
        if let Some(&id) = self.by_key.get(&key) {
            return id;
        }

        let id = self.entries.len() as u32 + 1;
        self.entries.push(MoveEntry::placeholder(id, name));
        self.by_key.insert(key, id);
        log::debug!("Registered move #{id}: {name}");
        id
    }

    /// Entry for an id.
    pub fn get(&self, id: u32) -> Option<&MoveEntry> {
        let index = (id as usize).checked_sub(1)?;
        self.entries.get(index)
    }

    /// All entries, ascending by id.
    pub fn entries(&self) -> &[MoveEntry] {
        &self.entries
    }

    /// Consume the registry, yielding its entries ascending by id.
    pub fn into_entries(self) -> Vec<MoveEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
