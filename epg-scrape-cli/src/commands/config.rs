use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use epg_scrape_catalog::{CatalogSettings, SettingSource};

use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

/// One line of `config show`: name, value (or a "not set" marker), source.
fn print_setting(name: &str, value: Option<&str>, source: &SettingSource) {
    let label = format!("{:<14}", format!("{}:", name));
    let value = value.map_or_else(
        || "not set".if_supports_color(Stdout, |t| t.yellow()).to_string(),
        str::to_string,
    );
    println!(
        "  {} {} {}",
        label.if_supports_color(Stdout, |t| t.cyan()),
        value,
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Show current settings and their sources.
pub(crate) fn run_config_show(config: Option<&Path>) -> Result<(), CliError> {
    let (settings, sources) = CatalogSettings::load_with_sources(config)?;
    let path = config.map(Path::to_path_buf).or_else(epg_scrape_catalog::config_path);

    println!(
        "{}",
        "Catalog Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    let file_state = match &path {
        Some(p) if p.exists() => "(exists)".if_supports_color(Stdout, |t| t.green()).to_string(),
        Some(_) => "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        None => "could not determine path"
            .if_supports_color(Stdout, |t| t.red())
            .to_string(),
    };
    let shown_path = path.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
    println!(
        "  Config file: {} {}",
        shown_path.if_supports_color(Stdout, |t| t.cyan()),
        file_state
    );
    println!();

    let api_key = settings.api_key.as_deref().map(mask_value);
    let timeout = settings.timeout.as_secs().to_string();
    print_setting("api_key", api_key.as_deref(), &sources.api_key);
    print_setting("base_url", Some(&settings.base_url), &sources.base_url);
    print_setting("timeout_secs", Some(&timeout), &sources.timeout);

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path(config: Option<&Path>) -> Result<(), CliError> {
    let path = config
        .map(Path::to_path_buf)
        .or_else(epg_scrape_catalog::config_path)
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    println!("{}", path.display());
    Ok(())
}
