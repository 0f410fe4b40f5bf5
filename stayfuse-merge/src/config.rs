//! Configuration resolution for stayfuse-merge
//!
//! Priority order: environment variable, then TOML config file, then the
//! compiled default. The config file location itself can be overridden via
//! `STAYFUSE_CONFIG`; otherwise the platform config directory is used.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Default listen port for the merge service
pub const DEFAULT_PORT: u16 = 5872;

/// Service configuration as stored in the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listen port (`port = 5872`)
    pub port: Option<u16>,
    /// Supplier sources merged once at startup, before serving traffic
    /// (`source_urls = ["https://..."]`)
    pub source_urls: Vec<String>,
}

/// Resolve the listen port.
///
/// Priority: `STAYFUSE_PORT` env var → TOML config file → compiled default.
pub fn resolve_port() -> u16 {
    if let Ok(raw) = std::env::var("STAYFUSE_PORT") {
        match raw.parse::<u16>() {
            Ok(port) => {
                info!(port, "Listen port loaded from environment");
                return port;
            }
            Err(_) => warn!(value = %raw, "Ignoring unparseable STAYFUSE_PORT"),
        }
    }

    if let Some(config) = load_config_file() {
        if let Some(port) = config.port {
            info!(port, "Listen port loaded from config file");
            return port;
        }
    }

    DEFAULT_PORT
}

/// Resolve the default supplier sources merged at startup.
///
/// Priority: `STAYFUSE_SOURCE_URLS` env var (comma-separated) → TOML config
/// file → none.
pub fn resolve_source_urls() -> Vec<String> {
    if let Ok(raw) = std::env::var("STAYFUSE_SOURCE_URLS") {
        let urls = split_source_list(&raw);
        if !urls.is_empty() {
            info!(count = urls.len(), "Default sources loaded from environment");
            return urls;
        }
        warn!("Ignoring empty STAYFUSE_SOURCE_URLS");
    }

    if let Some(config) = load_config_file() {
        if !config.source_urls.is_empty() {
            info!(count = config.source_urls.len(), "Default sources loaded from config file");
            return config.source_urls;
        }
    }

    Vec::new()
}

/// Split a comma-separated source list, trimming entries and dropping blanks
fn split_source_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the TOML config file if one exists
fn load_config_file() -> Option<ServiceConfig> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unparseable config file");
            None
        }
    }
}

/// Config file location: `STAYFUSE_CONFIG` override, else the platform
/// config directory (`~/.config/stayfuse/config.toml` on Linux)
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STAYFUSE_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let path = dirs::config_dir()?.join("stayfuse").join("config.toml");
    path.exists().then_some(path)
}
