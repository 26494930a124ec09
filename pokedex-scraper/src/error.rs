use pokedex_core::CoreError;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The species index could not be obtained or is unusable. Fatal.
    #[error("Species index unavailable: {0}")]
    Index(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ScrapeError {
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }

    /// True for errors that abort the whole run.
    pub fn is_fatal_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}
