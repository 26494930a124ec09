pub mod client;
pub mod error;
pub mod export;
pub mod log;
pub mod source;
pub mod types;
pub mod walk;

pub use client::PokeApiClient;
pub use error::ScrapeError;
pub use export::{ExportResult, run_export};
pub use crate::log::{WalkEntry, WalkLog, WalkSummary};
pub use source::CatalogSource;
pub use types::{IndexEntry, IndexResponse, SpeciesDetail};
pub use walk::{WalkOutcome, WalkProgress, classify, walk};
