use std::time::Duration;

use pokedex_core::Settings;

use crate::error::ScrapeError;
use crate::source::CatalogSource;
use crate::types::{IndexEntry, IndexResponse, SpeciesDetail};

/// Blocking HTTP client for PokeAPI.
///
/// One request at a time, no retries; a failed request is reported to the
/// caller as-is.
pub struct PokeApiClient {
    http: reqwest::blocking::Client,
    index_url: String,
}

impl PokeApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            index_url: settings.index_url(),
        })
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// GET `url` and return the body, failing on non-2xx status.
    fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }
}

impl CatalogSource for PokeApiClient {
    fn fetch_index(&self) -> Result<IndexResponse, ScrapeError> {
        log::debug!("GET {}", self.index_url);
        let text = self.get_text(&self.index_url)?;
        serde_json::from_str(&text).map_err(|e| {
            ScrapeError::index(format!(
                "Failed to parse index: {e}. Response: {}",
                snippet(&text)
            ))
        })
    }

    fn fetch_detail(&self, entry: &IndexEntry) -> Result<Option<SpeciesDetail>, ScrapeError> {
        log::debug!("GET {}", entry.url);
        let text = self.get_text(&entry.url)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// At most the first 200 bytes of a response body, cut on a char boundary.
fn snippet(text: &str) -> &str {
    let mut end = text.len().min(200);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
