/*!
 * Tests for app configuration loading and validation
 */

use babelbot::app_config::{Config, LogLevel};

#[test]
fn test_default_shouldBeValid() {
    let config = Config::default();

    assert_eq!(config.default_language, "en");
    assert_eq!(config.command_prefix, "!");
    assert_eq!(config.provider.timeout_secs, 10);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fromFile_withMissingFile_shouldReturnDefaults() {
    let config = Config::from_file("/nonexistent/conf.json").unwrap();
    assert_eq!(config.default_language, "en");
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "default_language": "fr" }"#).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.default_language, "fr");
    assert_eq!(config.command_prefix, "!");
    assert_eq!(config.provider.timeout_secs, 10);
}

#[test]
fn test_fromFile_withUnsupportedDefaultLanguage_shouldFail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "default_language": "klingon" }"#).unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_saveToFile_thenLoad_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.default_language = "de".to_string();
    config.provider.timeout_secs = 5;
    config.log_level = LogLevel::Debug;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.default_language, "de");
    assert_eq!(loaded.provider.timeout_secs, 5);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.provider.timeout_secs = 0;
    assert!(config.validate().is_err());
}
