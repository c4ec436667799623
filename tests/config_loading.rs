//! Integration tests for configuration loading.

use std::fs;

use tempfile::TempDir;

use idgen::Generator;
use idgen::config::AppConfig;

fn write_default(contents: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("default.toml"), contents).expect("Failed to write config");
    dir
}

#[test]
fn test_missing_files_use_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(dir.path()).unwrap();
    assert!(config.generator.options().is_empty());
    assert_eq!(config.observability.log_format, "text");
}

#[test]
fn test_load_generator_settings() {
    let dir = write_default(
        r#"
[generator]
charset = "0123456789"
default_length = 16
seed = 7

[observability]
log_level = "debug"
log_format = "json"
"#,
    );

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.generator.charset.as_deref(), Some("0123456789"));
    assert_eq!(config.generator.default_length, Some(16));
    assert_eq!(config.generator.seed, Some(7));
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.observability.log_format, "json");

    let mut generator = Generator::new(rand::rng(), config.generator.options()).unwrap();
    let id = generator.new_id();
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_invalid_generator_settings_fail_to_load() {
    let dir = write_default("[generator]\ncharset = \"abc\"\n");
    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(err.to_string().contains("character set is too small"));

    let dir = write_default("[generator]\ndefault_length = 8\n");
    assert!(AppConfig::load_from(dir.path()).is_err());
}

#[test]
fn test_invalid_log_format_fails_to_load() {
    let dir = write_default("[observability]\nlog_format = \"yaml\"\n");
    assert!(AppConfig::load_from(dir.path()).is_err());
}
