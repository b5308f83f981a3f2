//! Season/episode numbering from Com Hem style descriptions.
//!
//! The Swedish cable operator appends the numbering to the end of the EIT
//! description:
//! ```text
//! ... Christopher Godwin(Colin). 2013. Säsong 3. Del 1 av 7.
//! ```
//! The season and the total are optional, the part ("Del") is not.

use std::sync::LazyLock;

use regex::Regex;

use crate::event::EventDescriptor;
use crate::record::{Envelope, EpisodeRecord};

static EPISODE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\. (?:Säsong ([0-9]+)\. )?Del ([0-9]+)(?: av ([0-9]+))?\.\n?$")
        .expect("episode suffix regex should compile")
});

/// Parse the numbering suffix of a description.
///
/// Returns `None` when the suffix is not there at all. When it is, only the
/// groups that matched with a positive number are set, so the record may be
/// empty (e.g. "Del 0.").
///
/// # Examples
///
/// ```
/// use epg_scrape_core::episode::parse_episode_suffix;
///
/// let rec = parse_episode_suffix("Brittisk komediserie. 2013. Säsong 3. Del 1 av 7.").unwrap();
/// assert_eq!(rec.season_number, Some(3));
/// assert_eq!(rec.episode_number, Some(1));
/// assert_eq!(rec.episode_count, Some(7));
///
/// assert!(parse_episode_suffix("Amerikansk komedi från 2011.").is_none());
/// ```
pub fn parse_episode_suffix(description: &str) -> Option<EpisodeRecord> {
    let caps = EPISODE_SUFFIX.captures(description)?;

    let number = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0)
    };

    Some(EpisodeRecord {
        season_number: number(1),
        episode_number: number(2),
        episode_count: number(3),
    })
}

/// Run the episode-text extractor on an event.
///
/// No description, or no numbering suffix, is a silent miss.
pub fn extract_episode(event: &EventDescriptor) -> Option<Envelope> {
    let Some(description) = event.description.as_deref() else {
        log::debug!("No description; skipping episode extraction");
        return None;
    };

    match parse_episode_suffix(description) {
        Some(record) => {
            log::debug!("Parsed episode numbering: {:?}", record);
            Some(Envelope::episode(record))
        }
        None => {
            log::debug!("Description has no episode suffix");
            None
        }
    }
}
