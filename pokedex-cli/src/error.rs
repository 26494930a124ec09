use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Catalog walk or table output failed
    #[error("{0}")]
    Export(#[from] pokedex_scraper::ScrapeError),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}

impl From<pokedex_core::CoreError> for CliError {
    fn from(e: pokedex_core::CoreError) -> Self {
        Self::config(e.to_string())
    }
}
