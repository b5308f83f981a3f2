use std::cell::OnceCell;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use epg_scrape_catalog::{
    CatalogError, CatalogSettings, MovieCatalog, MovieDetails, OmdbClient, SearchHit,
};
use epg_scrape_lib::{Extractor, process_message};

use crate::error::CliError;

/// OMDb client built on first use, so events that never reach the catalog
/// do not depend on its configuration.
struct DeferredCatalog<'a> {
    config: Option<&'a Path>,
    timeout: Option<Duration>,
    client: OnceCell<OmdbClient>,
}

impl<'a> DeferredCatalog<'a> {
    fn new(config: Option<&'a Path>, timeout: Option<Duration>) -> Self {
        Self {
            config,
            timeout,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&OmdbClient, CatalogError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let settings = CatalogSettings::load(self.config)?.with_timeout(self.timeout);
        log::debug!(
            "Catalog: {} (timeout {}s)",
            settings.base_url,
            settings.timeout.as_secs()
        );
        let client = OmdbClient::new(settings)?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl MovieCatalog for DeferredCatalog<'_> {
    fn search(&self, title: &str) -> Result<Vec<SearchHit>, CatalogError> {
        self.client()?.search(title)
    }

    fn fetch_details(&self, id: &str) -> Result<MovieDetails, CatalogError> {
        self.client()?.fetch_details(id)
    }
}

/// Read one event from stdin and print its enrichment, if any, to stdout.
pub(crate) fn run_enrich(
    extractor: Extractor,
    config: Option<&Path>,
    timeout: Option<Duration>,
) -> Result<(), CliError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let catalog = DeferredCatalog::new(config, timeout);
    match process_message(&input, extractor, &catalog)? {
        Some(line) => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        None => log::debug!("Nothing to report for this event"),
    }

    Ok(())
}
