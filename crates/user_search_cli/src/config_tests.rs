use super::*;
use std::num::NonZeroUsize;
use tempfile::TempDir;

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();

    assert_eq!(config.client.page_size, 10);
    assert_eq!(config.client.enrich_concurrency, None);
    assert_eq!(config.client.base_uri, "https://api.github.com");
}

#[test]
fn test_app_config_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-search.toml");
    fs::write(
        &config_path,
        r#"
[client]
base_uri = "https://github.example.com/api/v3"
page_size = 25
enrich_concurrency = 4
"#,
    )
    .expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(config.client.base_uri, "https://github.example.com/api/v3");
    assert_eq!(config.client.page_size, 25);
    assert_eq!(config.client.enrich_concurrency, NonZeroUsize::new(4));
}

#[test]
fn test_app_config_load_empty_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "").expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(config.client.page_size, 10);
}

#[test]
fn test_app_config_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");
    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = AppConfig::load(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_rejects_zero_concurrency() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("zero.toml");
    fs::write(&config_path, "[client]\nenrich_concurrency = 0\n").expect("Failed to write config");

    let result = AppConfig::load(&config_path);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_app_config_load_nonexistent_file() {
    let nonexistent_path = PathBuf::from("nonexistent_config.toml");
    let result = AppConfig::load(&nonexistent_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_resolve_explicit_missing_path_fails() {
    let result = AppConfig::resolve(Some("definitely/not/here.toml"));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_get_config_path() {
    assert_eq!(
        get_config_path(None),
        PathBuf::from(DEFAULT_CONFIG_FILENAME)
    );
    assert_eq!(
        get_config_path(Some("custom.toml")),
        PathBuf::from("custom.toml")
    );
}
