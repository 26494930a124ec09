use crate::error::ScrapeError;
use crate::types::{IndexEntry, IndexResponse, SpeciesDetail};

/// Where the walker gets its catalog data.
///
/// [`PokeApiClient`](crate::PokeApiClient) is the network implementation;
/// tests substitute in-memory sources.
pub trait CatalogSource {
    /// Fetch the bulk species index.
    fn fetch_index(&self) -> Result<IndexResponse, ScrapeError>;

    /// Fetch the detail record for one index entry.
    ///
    /// `Ok(None)` means the source answered with a `null` record.
    fn fetch_detail(&self, entry: &IndexEntry) -> Result<Option<SpeciesDetail>, ScrapeError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn fetch_index(&self) -> Result<IndexResponse, ScrapeError> {
        (**self).fetch_index()
    }

    fn fetch_detail(&self, entry: &IndexEntry) -> Result<Option<SpeciesDetail>, ScrapeError> {
        (**self).fetch_detail(entry)
    }
}
