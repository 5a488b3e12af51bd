use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{base_args, default_config, init_db, init_db_with_data, rdl, setup_test_db, temp_out};

const FIRESTORE_LOGS: &str = r#"{
  "name": "Erin Example",
  "trainingLogs": [
    { "date": "2026-03-15", "flightDuration": 1.5 },
    { "date": "2026-03-05", "flightDuration": 5.0 },
    { "date": "31st of March", "flightDuration": 2.0 },
    { "flightDuration": 4.0 },
    { "date": { "seconds": 1773532800 }, "flightDuration": 3.0 }
  ]
}"#;

fn write_json(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write import file");
    p
}

#[test]
fn test_import_keeps_unusable_rows_but_skips_them() {
    let db_path = setup_test_db("imp_firestore");
    let cfg = default_config("imp_firestore", &db_path);
    init_db(&db_path, &cfg);
    let file = write_json("imp_firestore_in", FIRESTORE_LOGS);

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["import", "erin", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 5 entries for erin"))
        .stdout(contains("3 entries have a missing/invalid date"));

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["list", "--person", "erin", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("31st of March (invalid)"))
        .stdout(contains("5 entries"));

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["status", "erin", "--now", "2026-03-15T14:00", "--json"])
        .assert()
        .success()
        .stdout(contains("\"window_hours\": 1.5"))
        .stdout(contains("\"percentage\": 18.75"))
        .stdout(contains("\"window_hours\": 6.5"));
}

#[test]
fn test_import_plain_array() {
    let db_path = setup_test_db("imp_array");
    let cfg = default_config("imp_array", &db_path);
    init_db(&db_path, &cfg);
    let file = write_json(
        "imp_array_in",
        r#"[{"date": "2026-01-02", "flightDuration": 2.25}, {"date": "2026-01-03T10:00", "flightDuration": 1}]"#,
    );

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["import", "frank", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"))
        .stdout(contains("will not count").not());

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["list", "--person", "frank", "--period", "2026-01"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("02:15"));
}

#[test]
fn test_import_rejects_malformed_json_atomically() {
    let db_path = setup_test_db("imp_bad_json");
    let cfg = default_config("imp_bad_json", &db_path);
    init_db(&db_path, &cfg);
    let file = write_json("imp_bad_json_in", r#"[{"date": "2026-01-02"}]"#);

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["import", "gina", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("JSON error"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM training_logs", [], |row| row.get(0))
        .expect("count");
    assert_eq!(n, 0);
}

#[test]
fn test_export_json_for_person() {
    let db_path = setup_test_db("exp_json");
    let cfg = default_config("exp_json", &db_path);
    init_db_with_data(&db_path, &cfg);
    let out = temp_out("exp_json", "json");

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["export", "--format", "json", "--file", &out, "--person", "alice"])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["person"] == "alice"));
    assert!(rows.iter().all(|r| r["counted"] == true));
    assert!(rows.iter().any(|r| r["date"] == "2026-02-25"));
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("exp_csv");
    let cfg = default_config("exp_csv", &db_path);
    init_db_with_data(&db_path, &cfg);
    let out = temp_out("exp_csv", "csv");

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,person,date,flight_duration,counted,source,created_at")
    );
    assert_eq!(lines.count(), 4);
    assert!(content.contains("bob,2026-03-15T06:00,1.5,true,cli"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("exp_overwrite");
    let cfg = default_config("exp_overwrite", &db_path);
    init_db_with_data(&db_path, &cfg);
    let out = temp_out("exp_overwrite", "csv");
    fs::write(&out, "keep me").expect("write");

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("exp_relative");
    let cfg = default_config("exp_relative", &db_path);
    init_db_with_data(&db_path, &cfg);

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    let cfg = default_config("backup", &db_path);
    init_db_with_data(&db_path, &cfg);

    let plain = temp_out("backup_plain", "sqlite");
    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["backup", "--file", &plain, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_zipped", "zip");
    let requested = Path::new(&zipped).with_extension("sqlite");
    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["backup", "--file", &requested.to_string_lossy(), "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&zipped).exists());
    assert!(!Path::new(&zipped).with_extension("tmp").exists());

    rdl()
        .args(base_args(&db_path, &cfg))
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Backup created and compressed"));
}
