use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CatalogError;

pub const ENV_API_KEY: &str = "EPG_SCRAPE_OMDB_API_KEY";
pub const ENV_BASE_URL: &str = "EPG_SCRAPE_CATALOG_URL";
pub const ENV_TIMEOUT: &str = "EPG_SCRAPE_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the movie catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// OMDb API key. Only needed once an event actually reaches the catalog.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct SettingSources {
    pub api_key: SettingSource,
    pub base_url: SettingSource,
    pub timeout: SettingSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize)]
struct ConfigFile {
    catalog: Option<CatalogConfig>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct CatalogConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl CatalogSettings {
    /// Load settings from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults. `path` replaces the
    /// default config location. A missing file is not an error; a file that
    /// exists but does not parse is.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        Self::load_with_sources(path).map(|(settings, _)| settings)
    }

    /// Like [`load`](Self::load), also reporting where each value came from.
    pub fn load_with_sources(path: Option<&Path>) -> Result<(Self, SettingSources), CatalogError> {
        let config = load_config_file(path)?.unwrap_or_default();
        let sources = sources_from(&config, |var| std::env::var(var).is_ok());
        let settings = Self::resolve(config, |var| std::env::var(var).ok())?;
        Ok((settings, sources))
    }

    fn resolve(
        config: CatalogConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CatalogError> {
        let api_key = env(ENV_API_KEY)
            .or(config.api_key)
            .filter(|k| !k.trim().is_empty());

        let base_url = env(ENV_BASE_URL)
            .or(config.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match (env(ENV_TIMEOUT), config.timeout_secs) {
            (Some(raw), _) => parse_timeout(&raw)?,
            (None, Some(0)) => {
                return Err(CatalogError::Config(
                    "timeout_secs must be at least 1".to_string(),
                ));
            }
            (None, Some(secs)) => Duration::from_secs(secs),
            (None, None) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Apply a command-line timeout override.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(t) = timeout {
            self.timeout = t;
        }
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, CatalogError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(CatalogError::Config(format!(
            "{} must be a positive whole number of seconds, got '{}'",
            ENV_TIMEOUT, raw
        ))),
    }
}

/// Return the path to the default config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("epg-scrape").join("config.toml"))
}

fn sources_from(config: &CatalogConfig, has_env: impl Fn(&str) -> bool) -> SettingSources {
    let api_key = if has_env(ENV_API_KEY) {
        SettingSource::EnvVar(ENV_API_KEY)
    } else if config.api_key.is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Missing
    };

    let base_url = if has_env(ENV_BASE_URL) {
        SettingSource::EnvVar(ENV_BASE_URL)
    } else if config.base_url.is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    let timeout = if has_env(ENV_TIMEOUT) {
        SettingSource::EnvVar(ENV_TIMEOUT)
    } else if config.timeout_secs.is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    SettingSources {
        api_key,
        base_url,
        timeout,
    }
}

fn load_config_file(path: Option<&Path>) -> Result<Option<CatalogConfig>, CatalogError> {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(None);
    };
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config: ConfigFile = toml::from_str(&content).map_err(|e| {
        CatalogError::Config(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded config file {}", path.display());
    Ok(config.catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = CatalogSettings::resolve(CatalogConfig::default(), no_env).unwrap();
        assert_eq!(settings, CatalogSettings::default());
    }

    #[test]
    fn test_config_values_used() {
        let config: ConfigFile = toml::from_str(
            r#"
            [catalog]
            api_key = "abc123"
            base_url = "http://localhost:8080/"
            timeout_secs = 3
            "#,
        )
        .unwrap();
        let settings = CatalogSettings::resolve(config.catalog.unwrap(), no_env).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.base_url, "http://localhost:8080/");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_env_beats_config() {
        let config = CatalogConfig {
            api_key: Some("from-file".to_string()),
            base_url: None,
            timeout_secs: Some(30),
        };
        let env = |var: &str| match var {
            ENV_API_KEY => Some("from-env".to_string()),
            ENV_TIMEOUT => Some("5".to_string()),
            _ => None,
        };
        let settings = CatalogSettings::resolve(config, env).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = CatalogConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        let settings = CatalogSettings::resolve(config, no_env).unwrap();
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn test_bad_timeout_env_is_config_error() {
        let env = |var: &str| (var == ENV_TIMEOUT).then(|| "soon".to_string());
        let err = CatalogSettings::resolve(CatalogConfig::default(), env).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_is_config_error() {
        let env = |var: &str| (var == ENV_TIMEOUT).then(|| "0".to_string());
        let err = CatalogSettings::resolve(CatalogConfig::default(), env).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));

        let config = CatalogConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let err = CatalogSettings::resolve(config, no_env).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_timeout_override() {
        let settings = CatalogSettings::default().with_timeout(Some(Duration::from_secs(2)));
        assert_eq!(settings.timeout, Duration::from_secs(2));
        let settings = settings.with_timeout(None);
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_sources() {
        let config = CatalogConfig {
            api_key: Some("k".to_string()),
            ..Default::default()
        };
        let sources = sources_from(&config, |var| var == ENV_BASE_URL);
        assert_eq!(sources.api_key, SettingSource::ConfigFile);
        assert_eq!(sources.base_url, SettingSource::EnvVar(ENV_BASE_URL));
        assert_eq!(sources.timeout, SettingSource::Default);
        assert_eq!(sources.base_url.to_string(), "env $EPG_SCRAPE_CATALOG_URL");
    }
}
