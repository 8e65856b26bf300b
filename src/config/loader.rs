//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::view_state::types::PageSize;
use crate::view_state::window::DEFAULT_WINDOW_SIZE;

/// Page sizes offered by the selector when none are configured.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Items per page when none is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is unusable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pagewin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial items per page.
    #[serde(default)]
    pub items_per_page: Option<usize>,

    /// Number of page-number controls to show.
    #[serde(default)]
    pub window_size: Option<usize>,

    /// Page sizes offered by the selector.
    #[serde(default)]
    pub page_size_options: Option<Vec<usize>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Numeric settings are kept raw until [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial items per page.
    pub items_per_page: usize,
    /// Number of page-number controls.
    pub window_size: usize,
    /// Page sizes offered by the selector.
    pub page_size_options: Vec<usize>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            window_size: DEFAULT_WINDOW_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check the resolved values and produce the validated page size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero page size, a zero window
    /// size, a zero entry in `page_size_options`, or an empty
    /// `page_size_options`.
    pub fn validate(&self) -> Result<PageSize, ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "window_size",
                reason: "must show at least one page number".to_string(),
            });
        }
        if self.page_size_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "page_size_options",
                reason: "must list at least one page size".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                key: "page_size_options",
                reason: "page sizes must be >= 1".to_string(),
            });
        }
        PageSize::new(self.items_per_page).map_err(|e| ConfigError::InvalidValue {
            key: "items_per_page",
            reason: e.to_string(),
        })
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pagewin/pagewin.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pagewin").join("pagewin.log")
    } else {
        PathBuf::from("pagewin.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pagewin/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagewin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PAGEWIN_CONFIG` environment variable
/// 3. Default path `~/.config/pagewin/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PAGEWIN_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn env_usize(key: &'static str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                reason: format!("{:?}: {}", raw, e),
            }),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            key,
            reason: format!("{:?} is not valid UTF-8", raw),
        }),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PAGEWIN_PER_PAGE`: Override items per page
/// - `PAGEWIN_WINDOW`: Override window size
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a set variable is not a non-negative integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(per_page) = env_usize("PAGEWIN_PER_PAGE")? {
        config.items_per_page = per_page;
    }
    if let Some(window) = env_usize("PAGEWIN_WINDOW")? {
        config.window_size = window;
    }
    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        items_per_page: config.items_per_page.unwrap_or(defaults.items_per_page),
        window_size: config.window_size.unwrap_or(defaults.window_size),
        page_size_options: config
            .page_size_options
            .unwrap_or(defaults.page_size_options),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    per_page_override: Option<usize>,
    window_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(per_page) = per_page_override {
        config.items_per_page = per_page;
    }

    if let Some(window) = window_override {
        config.window_size = window;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
