//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.holonet/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::StartTab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HolonetConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub swapi: SwapiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<StartTab>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwapiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SWAPI_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub start_tab: StartTab,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.holonet/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".holonet").join("config.toml"))
}

/// Load config from `~/.holonet/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HolonetConfig::default()`.
pub fn load_config() -> Result<HolonetConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(HolonetConfig::default())
        }
    }
}

/// Same as `load_config()` but for an explicit path.
pub fn load_config_from(path: &Path) -> Result<HolonetConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HolonetConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HolonetConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Holonet Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "characters"           # "characters" or "favorites"

# [swapi]
# base_url = "https://swapi.dev/api" # Or set SWAPI_BASE_URL env var
# timeout_secs = 10                  # Or set SWAPI_TIMEOUT_SECS env var
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` and `cli_start_tab` come from CLI flags (None = not specified).
pub fn resolve(
    config: &HolonetConfig,
    cli_base_url: Option<&str>,
    cli_start_tab: Option<StartTab>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SWAPI_BASE_URL").ok())
        .or_else(|| config.swapi.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SWAPI_BASE_URL.to_string());

    // Timeout: env → config → default. Unparseable env values are ignored.
    let timeout_secs = std::env::var("SWAPI_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("Ignoring SWAPI_TIMEOUT_SECS={:?}: {}", raw, e);
                None
            }
        })
        .or(config.swapi.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let start_tab = cli_start_tab
        .or(config.general.start_tab)
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        start_tab,
    }
}
