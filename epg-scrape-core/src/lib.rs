//! Event model and text extraction for EPG enrichment.
//!
//! An EPG event arrives as a small JSON object (title, description, content
//! type). This crate decodes it, classifies it by content group, and parses
//! season/episode numbering out of the free-text description. The output
//! records serialize into the `{"episode": {...}}` envelope the scheduler
//! merges back into its EPG.

pub mod content;
pub mod episode;
pub mod error;
pub mod event;
pub mod record;

pub use content::{ADULT_MOVIE, ContentClass, ContentType, MOVIE_GROUP};
pub use episode::{extract_episode, parse_episode_suffix};
pub use error::EventError;
pub use event::EventDescriptor;
pub use record::{Enrichment, Envelope, EpisodeRecord, MovieRecord};
