//! Tests for TOML config loading, creation, and path resolution.

use super::loader::load_or_create;
use super::paths::resolve_config_path;
use super::*;
use crate::schema::{HexRgbConfig, LogLevel};
use hexrgb_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hexrgb_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 8080
expose_error_details = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.port, 8080);
    assert!(config.server.expose_error_details);
    // Defaults preserved
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = \"three thousand\"\n").unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn out_of_range_values_are_loaded_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nrequest_timeout_secs = 9999\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.request_timeout_secs, 9999);
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hexrgb").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config, HexRgbConfig::default());
    assert!(path.exists());

    // Second load reads the file that was just written.
    assert_eq!(load_from_path(&path).unwrap(), HexRgbConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: HexRgbConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config, HexRgbConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = resolve_config_path(None) {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("hexrgb"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn env_override_wins() {
    let path = resolve_config_path(Some("/srv/hexrgb.toml".into())).unwrap();
    assert_eq!(path, Path::new("/srv/hexrgb.toml"));
}

#[test]
fn empty_env_override_is_ignored() {
    if let Ok(path) = resolve_config_path(Some("".into())) {
        assert!(path.ends_with("hexrgb/config.toml"));
    }
}
