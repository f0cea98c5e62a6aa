//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization and file loading.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::config::{
    Config, ConfigError, DEFAULT_FORMAT, DEFAULT_LAYOUT, GeneralConfig, LogLevel,
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.player.format, DEFAULT_FORMAT);
    assert_eq!(config.player.layout, DEFAULT_LAYOUT);
    assert!(!config.player.concise_controls);
    assert!(config.player.ignored_players.is_empty());
    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.general.interval, 1);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"
        interval = 5

        [player]
        format = "{title}"
        layout = "player.prev,player.song,player.next"
        concise_controls = true
        ignored_players = ["firefox"]
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.interval, 5);
    assert_eq!(config.player.format, "{title}");
    assert_eq!(config.player.layout, "player.prev,player.song,player.next");
    assert!(config.player.concise_controls);
    assert_eq!(config.player.ignored_players, vec!["firefox".to_string()]);
}

#[test]
fn config_partial_section_keeps_defaults() {
    let config = Config::from_toml_str("[player]\nconcise_controls = true\n").unwrap();

    assert!(config.player.concise_controls);
    assert_eq!(config.player.format, DEFAULT_FORMAT);
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[player]"));

    let deserialized: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(original, deserialized);
}

#[test]
fn config_zero_interval_is_invalid() {
    let result = Config::from_toml_str("[general]\ninterval = 0\n");

    assert!(matches!(
        result,
        Err(ConfigError::InvalidConfigField { field, .. }) if field == "interval"
    ));
}

#[test]
fn config_bad_log_level_is_parse_error() {
    let result = Config::from_toml_str("[general]\nlog_level = \"loud\"\n");

    assert!(matches!(result, Err(ConfigError::TomlParseError { location, .. }) if location == "string"));
}

#[test]
fn config_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[player]\nformat = \"{album}\"\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.player.format, "{album}");
}

#[test]
fn config_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = Config::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::IoError { .. })));
}

#[test]
fn config_parse_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[player\nformat = 1").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.as_str(), "trace");
}
