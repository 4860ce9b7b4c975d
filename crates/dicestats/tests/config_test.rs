//! Tests for the configuration system.

use dicestats::{ChartConfig, DiceLimits, DicestatsConfig};
use std::fs;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("dicestats.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_bundled_defaults() {
    let config = DicestatsConfig::load().unwrap();
    assert!(*config.dice.max_count() > 0);
    assert!(*config.dice.max_sides() > 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_match_bundled_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, include_str!("../../../dicestats.toml"));
    let config = DicestatsConfig::from_file(path).unwrap();
    assert_eq!(config, DicestatsConfig::default());
}

#[test]
fn test_from_file_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[dice]
max_sides = 20

[chart]
default_title = "Rolls"
"#,
    );

    let config = DicestatsConfig::from_file(path).unwrap();
    assert_eq!(*config.dice.max_sides(), 20);
    assert_eq!(*config.dice.max_count(), 100);
    assert_eq!(config.chart.default_title(), "Rolls");
    assert_eq!(*config.chart.bar_width(), 40);
}

#[test]
fn test_from_file_missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = DicestatsConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_from_file_rejects_wrong_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[dice]\nmax_count = \"lots\"\n");
    assert!(DicestatsConfig::from_file(path).is_err());
}

#[test]
fn test_validate_rejects_zero_limits() {
    let config = DicestatsConfig {
        dice: DiceLimits::default().with_max_count(0),
        chart: ChartConfig::default(),
    };
    assert!(config.validate().is_err());

    let config = DicestatsConfig {
        dice: DiceLimits::default(),
        chart: ChartConfig::default().with_bar_width(0),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_work_budget() {
    let config = DicestatsConfig {
        dice: DiceLimits::default().with_max_work(0),
        chart: ChartConfig::default(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_bundled_work_budget() {
    assert_eq!(*DiceLimits::default().max_work(), 1_000_000);
}
