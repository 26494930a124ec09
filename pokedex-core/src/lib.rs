//! Core model for the species/move export: category mapping, the move
//! registry, flat table output, and run settings.

pub mod category;
pub mod error;
pub mod registry;
pub mod settings;
pub mod table;
pub mod types;

pub use category::{Category, resolve};
pub use error::CoreError;
pub use registry::MoveRegistry;
pub use settings::{Settings, SettingsOverrides, settings_path};
pub use table::{TableRow, write_moves_table, write_species_table, write_table};
pub use types::{MoveEntry, PLACEHOLDER_CATEGORY, PLACEHOLDER_POWER, SpeciesRow};
