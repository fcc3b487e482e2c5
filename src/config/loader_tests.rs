//! Tests for configuration file loading.

use super::*;
use crate::state::{QueryController, QueryInput};
use serial_test::serial;
use std::env;
use std::fs;
use std::time::{Duration, Instant};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_shelfview_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("shelfview") && path_str.ends_with("config.toml"),
        "Path should contain 'shelfview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_shelfview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("shelfview.log"),
        "Default log path should end with 'shelfview.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp(
        "shelfview_test_config.toml",
        r#"
initial_query = "astronomy"
fallback_query = "novel"
quick_queries = ["rust", "poetry"]
debounce_ms = 250
page_size = 50
request_timeout_secs = 5
row_height_estimate = 9
row_gap = 0
overscan_rows = 2
base_columns = 2

[[breakpoints]]
min_width = 120
columns = 3
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.initial_query.as_deref(), Some("astronomy"));
    assert_eq!(config.fallback_query.as_deref(), Some("novel"));
    assert_eq!(
        config.quick_queries,
        Some(vec!["rust".to_string(), "poetry".to_string()])
    );
    assert_eq!(config.debounce_ms, Some(250));
    assert_eq!(config.page_size, Some(50));
    assert_eq!(
        config.breakpoints,
        Some(vec![BreakpointEntry {
            min_width: 120,
            columns: 3
        }])
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("shelfview_test_invalid.toml", "page_size = [not toml");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a parse error, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys must be rejected");
}

#[test]
fn load_config_file_rejects_zero_page_size() {
    let config_path = write_temp("shelfview_test_zero_page.toml", "page_size = 0");

    let result = load_config_file(&config_path);
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string()
        })
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_blank_fallback_query() {
    let config_path = write_temp("shelfview_test_blank_fallback.toml", "fallback_query = \"  \"");

    let result = load_config_file(&config_path);
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            field: "fallback_query",
            reason: "must not be blank".to_string()
        })
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn blank_input_searches_configured_fallback() {
    let config = ConfigFile {
        fallback_query: Some(" novel ".to_string()),
        ..ConfigFile::default()
    };
    assert_eq!(config.validate(), Ok(()));

    let mut query = QueryController::new(merge_config(Some(config)).query_config());
    let start = Instant::now();
    query.edit(QueryInput::new(""), start);
    let committed = query.poll(start + Duration::from_secs(1));
    assert!(committed.is_some_and(|q| !q.trim().is_empty()));
}

#[test]
fn validate_rejects_zero_column_breakpoint() {
    let config = ConfigFile {
        breakpoints: Some(vec![BreakpointEntry {
            min_width: 80,
            columns: 0,
        }]),
        ..ConfigFile::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "breakpoints.columns",
            ..
        })
    ));
}

#[test]
fn validate_rejects_too_many_or_blank_chips() {
    let too_many = ConfigFile {
        quick_queries: Some((0..10).map(|i| format!("q{i}")).collect()),
        ..ConfigFile::default()
    };
    assert!(too_many.validate().is_err());

    let blank = ConfigFile {
        quick_queries: Some(vec!["history".to_string(), "  ".to_string()]),
        ..ConfigFile::default()
    };
    assert!(blank.validate().is_err());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        initial_query: Some("biology".to_string()),
        debounce_ms: Some(100),
        page_size: Some(40),
        row_height_estimate: Some(10),
        log_file_path: Some(PathBuf::from("/custom/path/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.initial_query, "biology");
    assert_eq!(resolved.debounce, Duration::from_millis(100));
    assert_eq!(resolved.page_size, 40);
    assert_eq!(resolved.grid.row_height_estimate, 10);
    assert_eq!(resolved.grid.row_gap, defaults.grid.row_gap);
    assert_eq!(resolved.grid.breakpoints, defaults.grid.breakpoints);
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/app.log"));
    assert_eq!(resolved.api_url, defaults.api_url);
}

#[test]
fn merge_config_builds_breakpoint_table() {
    let config_file = ConfigFile {
        base_columns: Some(2),
        breakpoints: Some(vec![
            BreakpointEntry {
                min_width: 1024,
                columns: 4,
            },
            BreakpointEntry {
                min_width: 768,
                columns: 3,
            },
        ]),
        ..ConfigFile::default()
    };

    let breakpoints = merge_config(Some(config_file)).grid.breakpoints;
    assert_eq!(breakpoints, ColumnBreakpoints::web());
}

#[test]
fn merge_config_base_columns_keeps_default_steps() {
    let config_file = ConfigFile {
        base_columns: Some(2),
        ..ConfigFile::default()
    };

    let breakpoints = merge_config(Some(config_file)).grid.breakpoints;
    assert_eq!(breakpoints.base().get(), 2);
    assert_eq!(breakpoints.steps(), ColumnBreakpoints::default().steps());
}

#[test]
fn resolved_config_converts_to_component_configs() {
    let resolved = ResolvedConfig::default();

    let query = resolved.query_config();
    assert_eq!(query, QueryConfig::default());

    let fetcher = resolved.fetcher_config();
    assert_eq!(fetcher, FetcherConfig::default());
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(shelfview_env)]
fn apply_env_overrides_respects_api_url_and_query() {
    let _api = EnvGuard::new("SHELFVIEW_API_URL");
    let _query = EnvGuard::new("SHELFVIEW_QUERY");

    env::set_var("SHELFVIEW_API_URL", "http://localhost:8080/search.json");
    env::set_var("SHELFVIEW_QUERY", "mathematics");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.api_url, "http://localhost:8080/search.json");
    assert_eq!(result.initial_query, "mathematics");
    assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
#[serial(shelfview_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _api = EnvGuard::new("SHELFVIEW_API_URL");
    let _query = EnvGuard::new("SHELFVIEW_QUERY");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(shelfview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("SHELFVIEW_CONFIG");

    let explicit = write_temp("shelfview_test_explicit.toml", "initial_query = \"explicit\"");
    let from_env = write_temp("shelfview_test_env.toml", "initial_query = \"env\"");
    env::set_var("SHELFVIEW_CONFIG", from_env.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.initial_query.as_deref(), Some("explicit"));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(shelfview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("SHELFVIEW_CONFIG");

    let from_env = write_temp("shelfview_test_env_only.toml", "fallback_query = \"novel\"");
    env::set_var("SHELFVIEW_CONFIG", from_env.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.fallback_query.as_deref(), Some("novel"));

    fs::remove_file(from_env).ok();
}

#[test]
fn apply_cli_overrides_replace_only_given_values() {
    let base = ResolvedConfig::default();

    let result = apply_cli_overrides(base.clone(), Some("history".to_string()), None, Some(50));
    assert_eq!(result.initial_query, "history");
    assert_eq!(result.page_size, base.page_size);
    assert_eq!(result.debounce, Duration::from_millis(50));

    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}
