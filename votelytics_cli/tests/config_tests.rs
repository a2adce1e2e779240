//! Configuration layering tests

use tempfile::TempDir;
use votelytics_cli::config::ConfigManager;
use votelytics_core::cache::CacheBackend;
use votelytics_core::config::CURRENT_SCHEMA_VERSION;

#[test]
fn defaults_apply_without_a_config_file() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("missing.toml"));

    let config = manager.load().unwrap();
    assert_eq!(config.client.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.client.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(config.output.default_format, "text");
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[client]
api_base_url = "https://api.votelytics.in/api"
timeout_seconds = 10

[client.cache]
backend = "memory"

[output]
color_enabled = false
"#,
    )
    .unwrap();

    let config = ConfigManager::with_path(path).load().unwrap();
    assert_eq!(config.client.api_base_url, "https://api.votelytics.in/api");
    assert_eq!(config.client.timeout_seconds, 10);
    assert_eq!(config.client.cache.backend, CacheBackend::Memory);
    assert!(!config.output.color_enabled);
    // Untouched keys keep their defaults.
    assert_eq!(config.client.schema_version, CURRENT_SCHEMA_VERSION);
}

#[test]
fn partial_config_file_keeps_other_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

    let config = ConfigManager::with_path(path).load().unwrap();
    assert_eq!(config.output.default_format, "json");
    assert_eq!(config.client.api_base_url, "http://localhost:8000/api");
}
