use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::catalog::{MovieCatalog, MovieDetails, SearchHit};
use crate::error::CatalogError;
use crate::settings::CatalogSettings;
use crate::types::{DetailResponse, NOT_FOUND, SearchResponse, UNKNOWN_ID};

/// Blocking HTTP client for the OMDb API.
///
/// Building the client does not touch the network, so it is cheap to create
/// for events that never reach the catalog.
pub struct OmdbClient {
    http: Client,
    settings: CatalogSettings,
}

impl OmdbClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("epg-scrape/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, settings })
    }

    /// Perform one GET against the API root and return the body.
    fn get(&self, params: &[(&str, &str)]) -> Result<String, CatalogError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(CatalogError::MissingApiKey(crate::settings::ENV_API_KEY))?;

        let resp = self
            .http
            .get(&self.settings.base_url)
            .query(&[("apikey", api_key)])
            .query(params)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CatalogError::InvalidApiKey(error_message(&text)));
        }
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(text)
    }

    /// Look up one identifier with the given plot length.
    ///
    /// `Ok(None)` means OMDb answered that it has no such title.
    fn fetch_plot(&self, id: &str, plot: &str) -> Result<Option<DetailResponse>, CatalogError> {
        let text = self.get(&[("i", id), ("plot", plot)])?;
        let resp: DetailResponse = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse details for {id}: {e}. Response: {}",
                truncate(&text)
            ))
        })?;

        if !resp.is_success() {
            return match resp.error.as_deref() {
                Some(NOT_FOUND | UNKNOWN_ID) => Ok(None),
                Some(msg) => Err(CatalogError::Api(msg.to_string())),
                None => Err(CatalogError::Api(format!("Lookup of {} failed", id))),
            };
        }
        Ok(Some(resp))
    }
}

impl MovieCatalog for OmdbClient {
    fn search(&self, title: &str) -> Result<Vec<SearchHit>, CatalogError> {
        let text = self.get(&[("s", title), ("type", "movie")])?;
        let resp: SearchResponse = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse search results: {e}. Response: {}",
                truncate(&text)
            ))
        })?;

        if !resp.is_success() {
            return match resp.error.as_deref() {
                Some(NOT_FOUND) | None => Ok(Vec::new()),
                Some(msg) => Err(CatalogError::Api(msg.to_string())),
            };
        }

        let hits: Vec<SearchHit> = resp.search.iter().map(|item| item.to_hit()).collect();
        log::debug!("Catalog search for '{}' returned {} results", title, hits.len());
        Ok(hits)
    }

    fn fetch_details(&self, id: &str) -> Result<MovieDetails, CatalogError> {
        let full = self
            .fetch_plot(id, "full")?
            .ok_or_else(|| CatalogError::Api(format!("No catalog entry for {}", id)))?;
        let short = self.fetch_plot(id, "short")?;
        if short.is_none() {
            log::debug!("No plot outline for {}", id);
        }
        Ok(full.into_details(short))
    }
}

/// Pull the `Error` string out of an OMDb body, or fall back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| v.get("Error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| truncate(text).to_string())
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}
