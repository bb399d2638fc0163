//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lectern/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LecternConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deck file; relative paths are resolved against `~/.lectern/`.
    pub deck: Option<String>,
    /// 1-based slide to open on.
    pub start_slide: Option<usize>,
    pub passphrase: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_progress: Option<bool>,
    pub footer: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FOOTER: &str = "Confidential & Proprietary";
pub const DEFAULT_SHOW_PROGRESS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None means the built-in deck.
    pub deck_path: Option<PathBuf>,
    /// 1-based starting slide, if one was asked for.
    pub start_slide: Option<usize>,
    pub passphrase: Option<String>,
    pub show_progress: bool,
    pub footer: String,
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

/// Returns `~/.lectern`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern"))
}

/// Returns the path to `~/.lectern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.lectern/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LecternConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LecternConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LecternConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LecternConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<LecternConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Lectern Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck = "decks/quarterly.json"      # JSON or TOML; relative to ~/.lectern/
# start_slide = 1                    # 1-based
# passphrase = "letmein"             # Or set LECTERN_PASSPHRASE env var

# [display]
# show_progress = true
# footer = "Confidential & Proprietary"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_deck` and `cli_start` are from CLI flags (None = not specified).
pub fn resolve(
    config: &LecternConfig,
    cli_deck: Option<&Path>,
    cli_start: Option<usize>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_deck, cli_start, |key| std::env::var(key).ok())
}

/// `resolve` with the environment supplied by `env`. Blank values count as unset.
pub fn resolve_with_env(
    config: &LecternConfig,
    cli_deck: Option<&Path>,
    cli_start: Option<usize>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    // Deck: CLI → env → config (relative to ~/.lectern) → built-in
    let deck_path = cli_deck
        .map(Path::to_path_buf)
        .or_else(|| lookup("LECTERN_DECK").map(PathBuf::from))
        .or_else(|| config.general.deck.as_deref().map(config_relative));

    let start_slide = cli_start.or(config.general.start_slide);

    // Passphrase: env → config
    let passphrase = lookup("LECTERN_PASSPHRASE").or_else(|| config.general.passphrase.clone());

    ResolvedConfig {
        deck_path,
        start_slide,
        passphrase,
        show_progress: config
            .display
            .show_progress
            .unwrap_or(DEFAULT_SHOW_PROGRESS),
        footer: config
            .display
            .footer
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
    }
}

/// Resolve a config-file path against `~/.lectern/` unless it is absolute.
fn config_relative(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
