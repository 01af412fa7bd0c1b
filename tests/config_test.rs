//! 設定ファイルのテスト

use izmir_eczane::config::Config;
use izmir_eczane::error::EczaneError;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, "https://openapi.izmir.bel.tr/api/ibb");
    assert_eq!(config.timeout_seconds, 15);
    assert!(!config.all_pharmacies);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("http://localhost:8080/api".into()).unwrap();
    config.set_timeout(30).unwrap();
    config.all_pharmacies = true;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.base_url, Config::default().base_url);
}

#[test]
fn test_broken_file_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, EczaneError::JsonParse(_)));
}

#[test]
fn test_setter_validation() {
    let mut config = Config::default();

    assert!(matches!(
        config.set_base_url("ftp://example.com".into()),
        Err(EczaneError::Config(_))
    ));
    assert!(matches!(config.set_timeout(0), Err(EczaneError::Config(_))));
    assert_eq!(config, Config::default());

    config.set_base_url("  https://example.com/ibb  ".into()).unwrap();
    assert_eq!(config.base_url, "https://example.com/ibb");
}
