//! Integration tests for tab strip config persistence.

use tab_strip_config::{
    ConfigError, InsertionPolicy, LogLevel, PageTransition, TabStripConfig, TransitionPlacement,
};
use tempfile::TempDir;

#[test]
fn test_save_then_load_preserves_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let mut config = TabStripConfig {
        insertion_policy: InsertionPolicy::InsertBeforeActive,
        event_history_limit: 16,
        log_level: LogLevel::Trace,
        ..TabStripConfig::default()
    };
    config
        .transition_placement
        .insert(PageTransition::Reload, TransitionPlacement::Adjacent);

    config.save_to(&path).expect("save should succeed");
    assert!(path.exists(), "config file should be written");
    assert!(
        !path.with_extension("yaml.tmp").exists(),
        "temp file should be renamed away"
    );

    let loaded = TabStripConfig::load_from(&path).expect("load should succeed");
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.yaml");

    let loaded = TabStripConfig::load_from(&path).expect("missing file is not an error");
    assert_eq!(loaded, TabStripConfig::default());
}

#[test]
fn test_load_malformed_yaml_is_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "insertion_policy: sideways\n").expect("write fixture");

    let err = TabStripConfig::load_from(&path).expect_err("unknown variant must fail");
    assert!(
        matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Parse(_))),
        "expected ConfigError::Parse, got {err:?}"
    );
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "event_history_limit: 0\n").expect("write fixture");

    let loaded = TabStripConfig::load_from(&path).expect("load should succeed");
    assert_eq!(loaded.event_history_limit, 0);
    assert_eq!(loaded.insertion_policy, InsertionPolicy::InsertAfterActive);
    assert_eq!(loaded.log_level, LogLevel::Off);
}

#[test]
fn test_config_path_is_inside_config_dir() {
    let path = TabStripConfig::config_path();
    assert!(path.starts_with(TabStripConfig::config_dir()));
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("config.yaml")
    );
}
