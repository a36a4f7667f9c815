use std::{fs, path::PathBuf};

use tempfile::tempdir;
use tracker_config::{Config, ConfigError, ConfigManager};

#[test]
fn default_config_matches_console_conventions() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.date_format, "%m/%d/%Y");
    assert!(cfg.ui_color_enabled);
    assert!(cfg.data_file.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let mut cfg = Config::default();
    cfg.currency_symbol = "€".to_string();
    cfg.ui_color_enabled = false;
    cfg.data_file = Some(PathBuf::from("ledgers/home.json"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(manager.config_path(), dir.path().join("config").join("config.json"));
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    assert_eq!(manager.load().expect("defaults"), Config::default());
}

#[test]
fn partial_config_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "currency_symbol": "£" }"#).unwrap();

    let loaded = ConfigManager::new(path).load().expect("partial config");

    assert_eq!(loaded.currency_symbol, "£");
    assert_eq!(loaded.date_format, Config::default_date_format());
}

#[test]
fn corrupt_config_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "currency = dollars").unwrap();

    let err = ConfigManager::new(path).load().expect_err("corrupt config");

    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn data_file_resolution() {
    let app_dir = PathBuf::from("/srv/tracker");
    let mut cfg = Config::default();
    assert_eq!(cfg.resolve_data_file(&app_dir), app_dir.join("budget.json"));

    cfg.data_file = Some(PathBuf::from("archive/2024.json"));
    assert_eq!(
        cfg.resolve_data_file(&app_dir),
        app_dir.join("archive/2024.json")
    );

    cfg.data_file = Some(PathBuf::from("/var/ledger.json"));
    assert_eq!(cfg.resolve_data_file(&app_dir), PathBuf::from("/var/ledger.json"));
}
