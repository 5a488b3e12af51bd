#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdutylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a config file for a test and return its path
pub fn setup_test_config(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutylog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, yaml).expect("write test config");
    p
}

/// Config with the default limits, pointing at `db_path`
pub fn default_config(name: &str, db_path: &str) -> String {
    setup_test_config(
        name,
        &format!(
            "database: {db_path}\nduty_limit_daily: 8.0\nduty_limit_weekly: 30.0\nduty_limit_monthly: 100.0\nwindow_boundary: inclusive\nshow_bars: true\n"
        ),
    )
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Base arguments shared by every invocation of a test
pub fn base_args<'a>(db_path: &'a str, cfg_path: &'a str) -> Vec<&'a str> {
    vec!["--db", db_path, "--config", cfg_path, "--test"]
}

/// Initialize DB (creates tables) in test mode
pub fn init_db(db_path: &str, cfg_path: &str) {
    rdl()
        .args(base_args(db_path, cfg_path))
        .arg("init")
        .assert()
        .success();
}

/// Initialize DB and add a small dataset around 2026-03-15
pub fn init_db_with_data(db_path: &str, cfg_path: &str) {
    init_db(db_path, cfg_path);

    for (person, date, hours) in [
        ("alice", "2026-03-15T07:00", "7"),
        ("alice", "2026-03-12", "10"),
        ("alice", "2026-02-25", "12"),
        ("bob", "2026-03-15T06:00", "1.5"),
    ] {
        rdl()
            .args(base_args(db_path, cfg_path))
            .args(["add", person, date, hours])
            .assert()
            .success();
    }
}
