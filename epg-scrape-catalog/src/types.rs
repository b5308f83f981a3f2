//! OMDb response payloads.
//!
//! OMDb answers every request with HTTP 200 and signals failure through
//! `"Response": "False"` plus an `Error` string. Missing values are the
//! literal string `"N/A"`.

use serde::Deserialize;

use crate::catalog::{MovieDetails, SearchHit};

/// Error text OMDb uses when a search or lookup found nothing.
pub const NOT_FOUND: &str = "Movie not found!";

/// Error text OMDb uses for an `i=` lookup of an identifier it does not know.
pub const UNKNOWN_ID: &str = "Incorrect IMDb ID.";

/// Response of `?s=<title>`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchItem>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchItem {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// `"2011"`, or a range such as `"2011–2013"` for serials.
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl SearchItem {
    /// The first year of the `Year` field.
    pub fn start_year(&self) -> Option<i32> {
        let year = self.year.as_deref()?;
        let digits: String = year.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.len() != 4 {
            return None;
        }
        digits.parse().ok()
    }

    pub fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.imdb_id.clone(),
            title: not_available(self.title.as_deref()),
            year: self.start_year(),
        }
    }
}

/// Response of `?i=<id>`.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl DetailResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    pub fn rating(&self) -> Option<f64> {
        not_available(self.imdb_rating.as_deref())?.parse().ok()
    }

    /// Merge the full-plot and short-plot responses for one title.
    pub fn into_details(self, short: Option<DetailResponse>) -> MovieDetails {
        let rating = self.rating();
        let cover_url = not_available(self.poster.as_deref());
        let full_size_cover_url = cover_url.as_deref().and_then(full_size_cover);
        let plot_outline = short.and_then(|s| not_available(s.plot.as_deref()));

        MovieDetails {
            title: not_available(self.title.as_deref()),
            plot_outline,
            plot: not_available(self.plot.as_deref()).into_iter().collect(),
            full_size_cover_url,
            cover_url,
            rating,
        }
    }
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// Strip the `._V1_...` resize modifiers from an Amazon image URL.
///
/// `https://m.media-amazon.com/images/M/abc@._V1_SX300.jpg` becomes
/// `https://m.media-amazon.com/images/M/abc@.jpg`. URLs without modifiers
/// have no separate full-size variant.
pub fn full_size_cover(url: &str) -> Option<String> {
    let marker = url.rfind("._V1")?;
    let ext = url.rfind('.').filter(|&i| i > marker)?;
    Some(format!("{}{}", &url[..marker], &url[ext..]))
}

fn not_available(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "N/A")
        .map(str::to_string)
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
