//! The narrow interface the movie enricher needs from a catalog.

use crate::error::CatalogError;

/// One entry of a title search, in the catalog's ranking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Catalog identifier, passed back to [`MovieCatalog::fetch_details`].
    pub id: String,
    pub title: Option<String>,
    /// Production year, if the catalog knows it.
    pub year: Option<i32>,
}

impl SearchHit {
    pub fn new(id: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            id: id.into(),
            title: None,
            year,
        }
    }
}

/// Full catalog entry for one movie.
///
/// Field names follow the catalog's own vocabulary; the enricher decides
/// which of them end up in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub title: Option<String>,
    pub plot_outline: Option<String>,
    /// Plot texts, longest first.
    pub plot: Vec<String>,
    pub full_size_cover_url: Option<String>,
    pub cover_url: Option<String>,
    /// Rating on a 0-10 scale.
    pub rating: Option<f64>,
}

/// A movie catalog searchable by title and addressable by identifier.
pub trait MovieCatalog {
    /// Search by title. An empty list means nothing matched.
    fn search(&self, title: &str) -> Result<Vec<SearchHit>, CatalogError>;

    /// Fetch the full entry for an identifier returned by [`search`](Self::search).
    fn fetch_details(&self, id: &str) -> Result<MovieDetails, CatalogError>;
}

impl<C: MovieCatalog + ?Sized> MovieCatalog for &C {
    fn search(&self, title: &str) -> Result<Vec<SearchHit>, CatalogError> {
        (**self).search(title)
    }

    fn fetch_details(&self, id: &str) -> Result<MovieDetails, CatalogError> {
        (**self).fetch_details(id)
    }
}
