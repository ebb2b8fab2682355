//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.deck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub show_progress: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_LOG_FILE: &str = "deck.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: String,
    pub show_progress: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Overrides collected from the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub theme: Option<&'a str>,
    pub log_file: Option<&'a Path>,
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

/// Returns the path to `~/.deck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deck").join("config.toml"))
}

/// Load config from `~/.deck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Deck Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# log_level = "debug"               # "off", "error", "warn", "info", "debug", "trace"
# log_file = "deck.log"             # Relative to the working directory

# [display]
# theme = "base16-ocean.dark"       # Any syntect default theme, e.g. "InspiredGitHub"
# show_progress = true              # Overall "n / total" in the title bar
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &DeckConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Theme: CLI → config → default
    let theme = cli
        .theme
        .map(|s| s.to_string())
        .or_else(|| config.display.theme.clone())
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .map(Path::to_path_buf)
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        theme,
        show_progress: config.display.show_progress.unwrap_or(true),
        log_level: resolve_log_level(config.general.log_level.as_deref()),
        log_file,
    }
}

fn resolve_log_level(level: Option<&str>) -> LevelFilter {
    match level {
        None => DEFAULT_LOG_LEVEL,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", s, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
    }
}
