use epg_scrape_catalog::CatalogError;
use epg_scrape_lib::PipelineError;
use thiserror::Error;

/// Exit status for malformed input and local failures.
pub(crate) const EXIT_FAILURE: u8 = 1;
/// Exit status when the movie catalog could not be used.
pub(crate) const EXIT_CATALOG_UNAVAILABLE: u8 = 2;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on stdin or stdout
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Invalid input document
    #[error("{0}")]
    Input(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catalog could not be reached or rejected the request
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn catalog_unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::CatalogUnavailable(_) => EXIT_CATALOG_UNAVAILABLE,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Event(e) => Self::Input(e.to_string()),
            PipelineError::Catalog(e) => Self::from(e),
            PipelineError::Output(e) => Self::Output(e.to_string()),
        }
    }
}

/// Errors raised while loading settings, before any event is processed.
impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Io(e) => Self::Io(e),
            CatalogError::Config(msg) => Self::config(msg),
            other => Self::catalog_unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::catalog_unavailable("timeout").exit_code(), 2);
        assert_eq!(CliError::config("bad toml").exit_code(), 1);
        assert_eq!(CliError::Input("eof".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_pipeline_catalog_error_is_unavailable() {
        let err: CliError = PipelineError::Catalog(CatalogError::Api("down".to_string())).into();
        assert_eq!(err.exit_code(), EXIT_CATALOG_UNAVAILABLE);
    }

    #[test]
    fn test_missing_api_key_during_enrichment_is_unavailable() {
        let err: CliError = PipelineError::Catalog(CatalogError::MissingApiKey("KEY")).into();
        assert_eq!(err.exit_code(), EXIT_CATALOG_UNAVAILABLE);
    }

    #[test]
    fn test_config_error_during_enrichment_is_failure() {
        let err: CliError = PipelineError::Catalog(CatalogError::Config("bad toml".to_string())).into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_settings_config_error_is_failure() {
        let err: CliError = CatalogError::Config("bad toml".to_string()).into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
