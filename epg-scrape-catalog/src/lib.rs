pub mod catalog;
pub mod client;
pub mod enrich;
pub mod error;
pub mod settings;
pub mod types;

pub use catalog::{MovieCatalog, MovieDetails, SearchHit};
pub use client::OmdbClient;
pub use enrich::{enrich_movie, parse_production_year, remap_details, select_candidate};
pub use error::CatalogError;
pub use settings::{CatalogSettings, SettingSource, SettingSources, config_path};
