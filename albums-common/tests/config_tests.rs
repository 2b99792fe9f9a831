//! Integration tests for bootstrap configuration resolution
//!
//! Tests cover:
//! - Config file location priority (explicit path, environment, default)
//! - Missing explicit config files are errors, missing default is not
//! - Values from file merged with command-line overrides
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate ALBUMS_CONFIG are marked with #[serial].

use albums_common::config::{
    default_config_path, locate_config_file, ConfigOverrides, ServiceConfig, CONFIG_ENV_VAR,
};
use albums_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write temp config");
    file
}

#[test]
#[serial]
fn test_explicit_config_file_is_loaded() {
    env::remove_var(CONFIG_ENV_VAR);
    let file = write_config("port = 9200\n[logging]\nlevel = \"trace\"\n");

    let overrides = ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(&overrides).unwrap();

    assert_eq!(config.port, 9200);
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_env_var_config_file_is_loaded() {
    let file = write_config("host = \"127.0.0.2\"\nseed = false\n");
    env::set_var(CONFIG_ENV_VAR, file.path());

    let config = ServiceConfig::resolve(&ConfigOverrides::default());
    env::remove_var(CONFIG_ENV_VAR);

    let config = config.unwrap();
    assert_eq!(config.host, "127.0.0.2");
    assert!(!config.seed);
}

#[test]
#[serial]
fn test_explicit_path_beats_env_var() {
    let env_file = write_config("port = 1111\n");
    let cli_file = write_config("port = 2222\n");
    env::set_var(CONFIG_ENV_VAR, env_file.path());

    let located = locate_config_file(Some(cli_file.path()));
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(located.unwrap().as_deref(), Some(cli_file.path()));
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let overrides = ConfigOverrides {
        config_file: Some(missing),
        ..Default::default()
    };

    assert!(matches!(
        ServiceConfig::resolve(&overrides),
        Err(Error::Config(_))
    ));
}

#[test]
#[serial]
fn test_missing_env_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.toml"));

    let result = locate_config_file(None);
    env::remove_var(CONFIG_ENV_VAR);

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_no_config_uses_default_location_only_if_present() {
    env::remove_var(CONFIG_ENV_VAR);

    let located = locate_config_file(None).unwrap();
    match default_config_path() {
        Some(path) if path.exists() => assert_eq!(located, Some(path)),
        _ => assert_eq!(located, None),
    }
}

#[test]
#[serial]
fn test_malformed_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let file = write_config("port = [not valid");

    let overrides = ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(
        ServiceConfig::resolve(&overrides),
        Err(Error::Toml(_))
    ));
}

#[test]
#[serial]
fn test_cli_overrides_applied_over_file() {
    env::remove_var(CONFIG_ENV_VAR);
    let file = write_config("host = \"0.0.0.0\"\nport = 9000\n");

    let overrides = ConfigOverrides {
        host: Some("127.0.0.1".to_string()),
        port: Some(8181),
        log_level: None,
        config_file: Some(file.path().to_path_buf()),
    };
    let config = ServiceConfig::resolve(&overrides).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:8181");
    assert_eq!(config.log_level, "info");
}
