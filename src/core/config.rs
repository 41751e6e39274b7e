//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lira/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LiraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub book: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub syntax_theme: Option<String>,
    pub sidebar_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub warmup_ms: Option<u64>,
    pub delay_ms: Option<u64>,
    pub policy: Option<NotifyPolicy>,
}

/// What happens when a notification is requested while another is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// The newest request cancels the in-flight one.
    #[default]
    Supersede,
    /// Sequences run independently and may interleave.
    Overlap,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 28;
pub const DEFAULT_WARMUP_MS: u64 = 100;
pub const DEFAULT_DELAY_MS: u64 = 1500;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: log::LevelFilter,
    pub book: Option<PathBuf>,
    pub syntax_theme: String,
    pub sidebar_width: u16,
    pub notify_warmup: Duration,
    pub notify_delay: Duration,
    pub notify_policy: NotifyPolicy,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&LiraConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub book: Option<PathBuf>,
    pub theme: Option<String>,
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

/// Returns the path to `~/.lira/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lira").join("config.toml"))
}

/// Load config from `~/.lira/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LiraConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LiraConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LiraConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LiraConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LiraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Lira Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # Or set LIRA_LOG_LEVEL
# book = "/path/to/book.toml"        # Opened when no BOOK argument is given

# [ui]
# syntax_theme = "base16-ocean.dark" # Or set LIRA_THEME / --theme
# sidebar_width = 28

# [notifications]
# warmup_ms = 100
# delay_ms = 1500
# policy = "supersede"               # "supersede" or "overlap"
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LiraConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let syntax_theme = cli
        .theme
        .clone()
        .or_else(|| std::env::var("LIRA_THEME").ok())
        .or_else(|| config.ui.syntax_theme.clone())
        .unwrap_or_else(|| DEFAULT_SYNTAX_THEME.to_string());

    // Log level: env → config → default
    let level_name = std::env::var("LIRA_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = parse_level(&level_name);

    ResolvedConfig {
        log_level,
        book: cli.book.clone().or_else(|| config.general.book.clone()),
        syntax_theme,
        sidebar_width: config.ui.sidebar_width.unwrap_or(DEFAULT_SIDEBAR_WIDTH),
        notify_warmup: Duration::from_millis(
            config.notifications.warmup_ms.unwrap_or(DEFAULT_WARMUP_MS),
        ),
        notify_delay: Duration::from_millis(
            config.notifications.delay_ms.unwrap_or(DEFAULT_DELAY_MS),
        ),
        notify_policy: config.notifications.policy.unwrap_or_default(),
    }
}

fn parse_level(name: &str) -> log::LevelFilter {
    match name.parse() {
        Ok(level) => level,
        Err(_) => {
            warn!("Unknown log level '{}', falling back to {}", name, DEFAULT_LOG_LEVEL);
            log::LevelFilter::Debug
        }
    }
}
