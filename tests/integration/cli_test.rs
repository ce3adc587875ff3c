//! CLI behavior tests.
//!
//! HOME points at a temp dir so the user's real config is never read. No
//! test here confirms a non-empty run, so the real clipboard is never touched.

#![cfg(unix)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn photo_paster(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("photo-paster").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_config(home: &Path, contents: &str) {
    let dir = home.join(".config").join("photo-paster");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn requires_a_folder_argument() {
    let home = TempDir::new().unwrap();

    photo_paster(home.path()).assert().failure();
}

#[test]
fn help_describes_the_folder_argument() {
    let home = TempDir::new().unwrap();

    photo_paster(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHOTOS_FOLDER"));
}

#[test]
fn missing_folder_fails_before_prompting() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope");

    photo_paster(home.path())
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"))
        .stdout(predicate::str::contains("Start upload process?").not());
}

#[test]
fn declining_exits_cleanly_after_listing() {
    let home = TempDir::new().unwrap();
    let photos = TempDir::new().unwrap();
    fs::write(photos.path().join("a.jpg"), b"").unwrap();
    fs::write(photos.path().join("b.PNG"), b"").unwrap();
    fs::write(photos.path().join("readme.txt"), b"").unwrap();

    photo_paster(home.path())
        .arg(photos.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found photos"))
        .stdout(predicate::str::contains("a.jpg"))
        .stdout(predicate::str::contains("b.PNG"))
        .stdout(predicate::str::contains("readme.txt").not())
        .stdout(predicate::str::contains("Start upload process?"))
        .stdout(predicate::str::contains("All batches processed").not());
}

#[test]
fn confirming_an_empty_folder_completes_without_batches() {
    let home = TempDir::new().unwrap();
    let photos = TempDir::new().unwrap();

    photo_paster(home.path())
        .arg(photos.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All batches processed successfully"))
        .stdout(predicate::str::contains("Batch 1/").not());
}

#[test]
fn zero_batch_size_in_config_is_rejected() {
    let home = TempDir::new().unwrap();
    let photos = TempDir::new().unwrap();
    write_config(home.path(), "[batch]\nsize = 0\n");

    photo_paster(home.path())
        .arg(photos.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch size must be at least 1"));
}
