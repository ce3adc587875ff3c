//! Unit tests for configuration loading

use std::fs;

use photo_paster::scheduler::ScheduleConfig;
use photo_paster::Config;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();

    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn file_values_reach_the_schedule() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[batch]\nsize = 10\ndelay_secs = 30\nlead_in_secs = 0\n\n[notify]\nbeep = false\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.schedule(),
        ScheduleConfig {
            batch_size: 10,
            wait_secs: 30,
            lead_in_secs: 0,
        }
    );
    assert!(!config.notify.beep);
}

#[test]
fn malformed_file_reports_its_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[batch\nsize = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn zero_batch_size_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[batch]\nsize = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(format!("{:#}", err).contains("Invalid configuration"));
}
