//! Editor configuration and application paths.
//!
//! `EditorConfig` is stored as pretty JSON in `trackline.json` inside the
//! config directory. A missing file yields defaults; a missing key inside the
//! file falls back to its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::engine::LengthPolicy;
use crate::entities::PaletteConfig;
use crate::widgets::timeline::TimelineConfig;

/// Config file name
pub const CONFIG_FILE: &str = "trackline.json";
/// Default log file name (data directory)
pub const LOG_FILE: &str = "trackline.log";
/// Env var overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TRACKLINE_CONFIG_DIR";

/// Everything the editor reads at startup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub timeline: TimelineConfig,
    pub palette: PaletteConfig,
    pub length_policy: LengthPolicy,
}

impl EditorConfig {
    /// Load from the config directory, defaults if the file does not exist
    pub fn load(paths: &PathConfig) -> Result<Self> {
        let path = config_file(CONFIG_FILE, paths);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to the config directory, creating it if needed
    pub fn save(&self, paths: &PathConfig) -> Result<PathBuf> {
        ensure_dirs(paths)?;
        let path = config_file(CONFIG_FILE, paths);
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(path)
    }
}

/// Overrides for default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (TRACKLINE_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));
        Self { config_dir }
    }
}

/// Path to a configuration file.
///
/// Priority:
/// 1. `--config-dir`
/// 2. `TRACKLINE_CONFIG_DIR`
/// 3. Current folder if it already holds trackline files
/// 4. Platform config directory (`dirs-next`), e.g. `~/.config/trackline`
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_config_dir(config).join(name)
}

/// Path to a data file (logs). Same priority as `config_file`, with the
/// platform data directory as default.
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_data_dir(config).join(name)
}

/// Create config and data directories if missing
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_config_dir(config);
    let data_dir = get_data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    }
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }
    Ok(())
}

fn has_local_files(dir: &std::path::Path) -> bool {
    [CONFIG_FILE, LOG_FILE].iter().any(|f| dir.join(f).exists())
}

fn local_dir() -> Option<PathBuf> {
    std::env::current_dir().ok().filter(|d| has_local_files(d))
}

fn get_config_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }
    if let Some(dir) = local_dir() {
        return dir;
    }
    dirs_next::config_dir()
        .map(|d| d.join("trackline"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn get_data_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }
    if let Some(dir) = local_dir() {
        return dir;
    }
    dirs_next::data_dir()
        .map(|d| d.join("trackline"))
        .unwrap_or_else(|| PathBuf::from("."))
}
