use epg_scrape_catalog::MovieCatalog;
use epg_scrape_core::EventDescriptor;

use crate::dispatch::{Extractor, dispatch};
use crate::error::PipelineError;

/// Process one raw JSON message end to end.
///
/// Returns the JSON line to print, or `None` when the event yields nothing.
pub fn process_message<C>(
    input: &str,
    extractor: Extractor,
    catalog: &C,
) -> Result<Option<String>, PipelineError>
where
    C: MovieCatalog + ?Sized,
{
    let event = EventDescriptor::from_json(input)?;

    let Some(envelope) = dispatch(&event, extractor, catalog)? else {
        return Ok(None);
    };

    envelope.to_json().map(Some).map_err(PipelineError::Output)
}
