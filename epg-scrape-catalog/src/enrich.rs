//! Movie enrichment: match an EPG event to a catalog entry by title and
//! production year, then remap the entry into a [`MovieRecord`].

use std::sync::LazyLock;

use epg_scrape_core::{ContentClass, Envelope, EventDescriptor, MovieRecord};
use regex::Regex;

use crate::catalog::{MovieCatalog, MovieDetails, SearchHit};
use crate::error::CatalogError;

static PRODUCTION_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("production year regex should compile"));

/// Find the production year in a description.
///
/// Descriptions typically read "Amerikansk komedi från 2011. ...". The first
/// four-digit run wins, wherever it is. `0000` counts as no year.
pub fn parse_production_year(description: &str) -> Option<i32> {
    PRODUCTION_YEAR
        .find(description)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|y| *y != 0)
}

/// Whether `year` lies within one year of the hit's production year.
///
/// A hit without a year never matches.
pub fn year_matches(hit: &SearchHit, year: i32) -> bool {
    hit.year
        .is_some_and(|hit_year| (hit_year - 1..=hit_year + 1).contains(&year))
}

/// Pick the search hit to fetch details for.
///
/// Hits are tried in catalog order. Without a year the first hit is taken.
/// With a year, the first hit within one year of it is taken, falling back to
/// the first hit when none is. Returns `None` only for an empty list.
pub fn select_candidate(hits: &[SearchHit], year: Option<i32>) -> Option<&SearchHit> {
    let Some(year) = year else {
        return hits.first();
    };

    hits.iter()
        .find(|hit| year_matches(hit, year))
        .or_else(|| {
            if !hits.is_empty() {
                log::debug!("No result within a year of {}; using top result", year);
            }
            hits.first()
        })
}

/// Map catalog fields onto the output record, skipping empty values.
pub fn remap_details(details: &MovieDetails) -> MovieRecord {
    let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

    MovieRecord {
        title: non_empty(&details.title),
        summary: non_empty(&details.plot_outline),
        description: details.plot.first().filter(|p| !p.is_empty()).cloned(),
        image: non_empty(&details.full_size_cover_url).or_else(|| non_empty(&details.cover_url)),
        star_rating: details.rating.and_then(star_rating),
    }
}

/// Scale a 0-10 rating to 0-100. A zero rating is treated as unrated.
fn star_rating(rating: f64) -> Option<u32> {
    if !rating.is_finite() || rating <= 0.0 {
        return None;
    }
    Some((rating * 10.0).round().min(100.0) as u32)
}

/// Run the movie enricher on an event.
///
/// Events outside the movie content group, adult movies, and events without a
/// title are skipped with `Ok(None)`, as is a search that returns nothing.
/// Catalog failures are returned as errors.
pub fn enrich_movie<C>(event: &EventDescriptor, catalog: &C) -> Result<Option<Envelope>, CatalogError>
where
    C: MovieCatalog + ?Sized,
{
    match event.classification() {
        ContentClass::Movie => {}
        ContentClass::AdultMovie => {
            log::debug!("Adult movie; skipping catalog lookup");
            return Ok(None);
        }
        class => {
            log::debug!("Not a movie ({}); skipping catalog lookup", class);
            return Ok(None);
        }
    }

    let Some(title) = event.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
        log::debug!("Movie has no title; skipping catalog lookup");
        return Ok(None);
    };

    let year = event.description.as_deref().and_then(parse_production_year);

    let hits = catalog.search(title)?;
    let Some(hit) = select_candidate(&hits, year) else {
        log::info!("No catalog results for '{}'", title);
        return Ok(None);
    };

    log::debug!(
        "Selected {} '{}' ({}) for '{}' (description year: {})",
        hit.id,
        hit.title.as_deref().unwrap_or("untitled"),
        hit.year.map_or("unknown year".to_string(), |y| y.to_string()),
        title,
        year.map_or("none".to_string(), |y| y.to_string()),
    );

    let details = catalog.fetch_details(&hit.id)?;
    Ok(Some(Envelope::movie(remap_details(&details))))
}
