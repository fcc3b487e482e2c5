//! Configuration file loading with precedence handling.

use crate::source::open_library::{
    DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
use crate::source::FetcherConfig;
use crate::state::query::{
    QueryConfig, DEFAULT_DEBOUNCE, DEFAULT_FALLBACK_QUERY, DEFAULT_INITIAL_QUERY,
    DEFAULT_QUICK_QUERIES,
};
use crate::view_state::{Breakpoint, ColumnBreakpoints, ColumnCount, GridConfig};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Quick chips are selected with the digit keys 1..=9.
pub const MAX_QUICK_QUERIES: usize = 9;

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

    /// A value parsed but is out of range.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// One `[[breakpoints]]` entry.
///
/// ```toml
/// [[breakpoints]]
/// min_width = 120
/// columns = 3
/// ```
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BreakpointEntry {
    /// Minimum terminal width in cells (inclusive).
    pub min_width: u16,
    /// Columns at and above `min_width`.
    pub columns: usize,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/shelfview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Query active at startup.
    #[serde(default)]
    pub initial_query: Option<String>,

    /// Query used when the input is blank.
    #[serde(default)]
    pub fallback_query: Option<String>,

    /// Quick-select chips (at most 9).
    #[serde(default)]
    pub quick_queries: Option<Vec<String>>,

    /// Debounce interval in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Books requested per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Search endpoint URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// `User-Agent` header for API requests.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Estimated card row height in lines.
    #[serde(default)]
    pub row_height_estimate: Option<usize>,

    /// Blank lines between card rows.
    #[serde(default)]
    pub row_gap: Option<usize>,

    /// Estimated rows of overscan above and below the viewport.
    #[serde(default)]
    pub overscan_rows: Option<usize>,

    /// Columns below the first breakpoint.
    #[serde(default)]
    pub base_columns: Option<usize>,

    /// Width → column breakpoints.
    #[serde(default)]
    pub breakpoints: Option<Vec<BreakpointEntry>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: Option<u64>) -> Result<(), ConfigError> {
            match value {
                Some(0) => Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be at least 1".to_string(),
                }),
                _ => Ok(()),
            }
        }

        positive("page_size", self.page_size.map(u64::from))?;
        positive("request_timeout_secs", self.request_timeout_secs)?;
        positive("row_height_estimate", self.row_height_estimate.map(|v| v as u64))?;
        positive("base_columns", self.base_columns.map(|v| v as u64))?;

        if let Some(entries) = &self.breakpoints {
            for entry in entries {
                positive("breakpoints.columns", Some(entry.columns as u64))?;
            }
        }

        if self
            .fallback_query
            .as_deref()
            .is_some_and(|fallback| fallback.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "fallback_query",
                reason: "must not be blank".to_string(),
            });
        }

        if let Some(chips) = &self.quick_queries {
            if chips.len() > MAX_QUICK_QUERIES {
                return Err(ConfigError::InvalidValue {
                    field: "quick_queries",
                    reason: format!("at most {MAX_QUICK_QUERIES} entries, got {}", chips.len()),
                });
            }
            if chips.iter().any(|chip| chip.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "quick_queries",
                    reason: "entries must not be blank".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Query active at startup.
    pub initial_query: String,
    /// Query used when the input is blank.
    pub fallback_query: String,
    /// Quick-select chips.
    pub quick_queries: Vec<String>,
    /// Debounce interval.
    pub debounce: Duration,
    /// Books per page.
    pub page_size: u32,
    /// Search endpoint URL.
    pub api_url: String,
    /// `User-Agent` header.
    pub user_agent: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Card grid layout.
    pub grid: GridConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_query: DEFAULT_INITIAL_QUERY.to_string(),
            fallback_query: DEFAULT_FALLBACK_QUERY.to_string(),
            quick_queries: DEFAULT_QUICK_QUERIES.iter().map(|q| q.to_string()).collect(),
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            grid: GridConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for the query controller.
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig {
            debounce: self.debounce,
            fallback: self.fallback_query.clone(),
            quick_queries: self.quick_queries.clone(),
            initial_query: self.initial_query.clone(),
        }
    }

    /// Settings for the HTTP fetcher.
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            api_url: self.api_url.clone(),
            page_size: self.page_size,
            user_agent: self.user_agent.clone(),
            timeout: self.request_timeout,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/shelfview/shelfview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("shelfview").join("shelfview.log")
    } else {
        PathBuf::from("shelfview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read, parsed or validated.
///
/// # Errors
///
/// Returns error if file exists but has read, parse or range errors.
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

    config.validate()?;
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/shelfview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SHELFVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/shelfview/config.toml`
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

    if let Ok(env_path) = std::env::var("SHELFVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SHELFVIEW_API_URL`: Override the search endpoint
/// - `SHELFVIEW_QUERY`: Override the startup query
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(api_url) = std::env::var("SHELFVIEW_API_URL") {
        config.api_url = api_url;
    }

    if let Ok(query) = std::env::var("SHELFVIEW_QUERY") {
        config.initial_query = query;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// Expects a file that passed [`ConfigFile::validate`]; out-of-range column
/// counts that slip through fall back to one column.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let grid_defaults = defaults.grid;
    let breakpoints = match (config.base_columns, config.breakpoints) {
        (None, None) => grid_defaults.breakpoints,
        (base, steps) => {
            let base = base.map_or(grid_defaults.breakpoints.base(), column_count);
            let steps = match steps {
                Some(entries) => entries
                    .into_iter()
                    .map(|entry| Breakpoint {
                        min_width: entry.min_width,
                        columns: column_count(entry.columns),
                    })
                    .collect(),
                None => grid_defaults.breakpoints.steps().to_vec(),
            };
            ColumnBreakpoints::new(base, steps)
        }
    };

    ResolvedConfig {
        initial_query: config.initial_query.unwrap_or(defaults.initial_query),
        fallback_query: config.fallback_query.unwrap_or(defaults.fallback_query),
        quick_queries: config.quick_queries.unwrap_or(defaults.quick_queries),
        debounce: config
            .debounce_ms
            .map_or(defaults.debounce, Duration::from_millis),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        api_url: config.api_url.unwrap_or(defaults.api_url),
        user_agent: config.user_agent.unwrap_or(defaults.user_agent),
        request_timeout: config
            .request_timeout_secs
            .map_or(defaults.request_timeout, Duration::from_secs),
        grid: GridConfig {
            row_height_estimate: config
                .row_height_estimate
                .unwrap_or(grid_defaults.row_height_estimate),
            row_gap: config.row_gap.unwrap_or(grid_defaults.row_gap),
            overscan_rows: config.overscan_rows.unwrap_or(grid_defaults.overscan_rows),
            breakpoints,
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn column_count(columns: usize) -> ColumnCount {
    ColumnCount::new(columns).unwrap_or(ColumnCount::ONE)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    query_override: Option<String>,
    page_size_override: Option<u32>,
    debounce_ms_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(query) = query_override {
        config.initial_query = query;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(debounce_ms) = debounce_ms_override {
        config.debounce = Duration::from_millis(debounce_ms);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
