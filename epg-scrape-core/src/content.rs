//! Content type codes and their classification.
//!
//! DVB content descriptors carry an 8-bit code where the high nibble is the
//! content group ("Movie/Drama", "News", "Show", ...) and the low nibble the
//! genre within that group. Only the group matters for enrichment.

use serde::{Deserialize, Serialize};

/// Content group for movies.
pub const MOVIE_GROUP: u8 = 0x1;

/// Code reserved for adult movies. These are rarely listed in catalogs.
pub const ADULT_MOVIE: u32 = 24;

/// A raw content type code as broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(u32);

impl ContentType {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// The content group (high nibble of the low byte).
    pub const fn group(self) -> u8 {
        ((self.0 >> 4) & 0xf) as u8
    }
}

impl From<u32> for ContentType {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// How an event should be treated by the enrichment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    /// No content type was broadcast.
    Unclassified,
    /// Content group 1.
    Movie,
    /// Content group 1 with the adult sentinel code.
    AdultMovie,
    /// Any other content group (series, news, sports, ...).
    Other { group: u8 },
}

impl ContentClass {
    /// Classify an optional content type code.
    ///
    /// This is the only place the nibble arithmetic happens; everything else
    /// matches on the returned class.
    pub fn classify(content_type: Option<ContentType>) -> Self {
        let Some(ct) = content_type else {
            return Self::Unclassified;
        };

        match ct.group() {
            MOVIE_GROUP if ct.code() == ADULT_MOVIE => Self::AdultMovie,
            MOVIE_GROUP => Self::Movie,
            group => Self::Other { group },
        }
    }

    /// True for anything in the movie content group, adult or not.
    pub fn is_movie_group(self) -> bool {
        matches!(self, Self::Movie | Self::AdultMovie)
    }
}

impl std::fmt::Display for ContentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified => write!(f, "unclassified"),
            Self::Movie => write!(f, "movie"),
            Self::AdultMovie => write!(f, "adult movie"),
            Self::Other { group } => write!(f, "content group {:#x}", group),
        }
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
