//! Dispatch of EPG events to the episode and movie extractors.
//!
//! This is the glue the `epg-scrape` binary runs once per event: decode the
//! JSON message, classify it, run one extractor, and serialize whatever it
//! produced.

pub mod dispatch;
pub mod error;
pub mod pipeline;

pub use dispatch::{Extractor, dispatch};
pub use error::PipelineError;
pub use pipeline::process_message;
