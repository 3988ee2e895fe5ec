//! Configuration module tests

use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = SweepConfig::default();

    assert_eq!(config.clean.directory, "./odin-assimp");
    assert_eq!(config.clean.extension, ".odin");
    assert!(config.clean.exclude_patterns.is_empty());
    assert!(config.clean.skip_unchanged_writes);
    assert!(!config.clean.skip_errors);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_extension() {
    let mut config = SweepConfig::default();
    config.clean.extension = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_extension_without_dot() {
    let mut config = SweepConfig::default();
    config.clean.extension = "odin".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_invalid_glob() {
    let mut config = SweepConfig::default();
    config.clean.exclude_patterns = vec!["[unclosed".to_string()];

    assert!(config.validate().is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("odinsweep.yml");

    let mut config = SweepConfig::default();
    config.clean.directory = "./generated".to_string();
    config.clean.exclude_patterns = vec!["manual_*.odin".to_string()];
    config.save_to_file(&path).expect("Failed to save config");

    let loaded = SweepConfig::load_from_file(&path).expect("Failed to load config");
    assert_eq!(loaded.clean.directory, "./generated");
    assert_eq!(loaded.clean.extension, ".odin");
    assert_eq!(loaded.clean.exclude_patterns, vec!["manual_*.odin"]);
}

#[test]
fn test_load_applies_serde_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("odinsweep.yml");

    // Minimal config: omitted fields fall back to serde defaults
    std::fs::write(
        &path,
        "clean:\n  directory: ./out\n  extension: .odin\n",
    )
    .unwrap();

    let loaded = SweepConfig::load_from_file(&path).expect("Failed to load config");
    assert!(loaded.clean.skip_unchanged_writes);
    assert!(!loaded.clean.skip_errors);
    assert!(loaded.clean.exclude_patterns.is_empty());
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yml");

    assert!(SweepConfig::load_from_file(&path).is_err());
}
