use epg_scrape_catalog::{CatalogError, MovieCatalog, enrich_movie};
use epg_scrape_core::{Envelope, EventDescriptor, extract_episode};

/// Which extractor to run for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extractor {
    /// Choose by content group: movies go to the catalog, everything else
    /// to the episode-text parser.
    #[default]
    Auto,
    /// Always run the episode-text parser.
    Episode,
    /// Always run the movie enricher. It still skips non-movies on its own.
    Movie,
}

impl Extractor {
    /// Resolve `Auto` for a given event.
    pub fn resolve(self, event: &EventDescriptor) -> Self {
        match self {
            Self::Auto if event.classification().is_movie_group() => Self::Movie,
            Self::Auto => Self::Episode,
            other => other,
        }
    }
}

impl std::fmt::Display for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Episode => write!(f, "episode"),
            Self::Movie => write!(f, "movie"),
        }
    }
}

/// Run the selected extractor on one event.
///
/// The catalog is only consulted on the movie path. `Ok(None)` means there
/// is nothing to report for this event.
pub fn dispatch<C>(
    event: &EventDescriptor,
    extractor: Extractor,
    catalog: &C,
) -> Result<Option<Envelope>, CatalogError>
where
    C: MovieCatalog + ?Sized,
{
    let resolved = extractor.resolve(event);
    log::debug!(
        "Event classified as {}; running {} extractor",
        event.classification(),
        resolved
    );

    match resolved {
        Extractor::Movie => enrich_movie(event, catalog),
        Extractor::Episode | Extractor::Auto => Ok(extract_episode(event)),
    }
}
