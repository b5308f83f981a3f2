use epg_scrape_catalog::CatalogError;
use epg_scrape_core::EventError;
use thiserror::Error;

/// Errors that abort processing of one event.
///
/// Parse misses and classification skips are not errors; they produce no
/// output instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input was not valid JSON
    #[error(transparent)]
    Event(#[from] EventError),

    /// The movie catalog could not be reached or answered with an error
    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// The output record could not be serialized
    #[error("Failed to serialize output: {0}")]
    Output(#[source] serde_json::Error),
}
