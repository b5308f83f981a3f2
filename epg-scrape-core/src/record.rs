//! Output records and the envelope they are wrapped in.
//!
//! Absent fields are skipped during serialization; a record never carries a
//! `null` or a zero placeholder.

use serde::Serialize;

/// Season and episode numbering parsed from a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
}

/// Movie metadata remapped from a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Rating on a 0-100 scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<u32>,
}

/// Either kind of record. Serialized without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Enrichment {
    Episode(EpisodeRecord),
    Movie(MovieRecord),
}

/// The top-level output object.
///
/// The key is `episode` for movies too; the scheduler reads episode-level
/// fields from that map regardless of what was enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub episode: Enrichment,
}

impl Envelope {
    pub fn episode(record: EpisodeRecord) -> Self {
        Self {
            episode: Enrichment::Episode(record),
        }
    }

    pub fn movie(record: MovieRecord) -> Self {
        Self {
            episode: Enrichment::Movie(record),
        }
    }

    /// Serialize to a single line of JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
