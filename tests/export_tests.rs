mod common;
use common::{init_db_with_data, setup_test_db, temp_out, wsm};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    wsm()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 record(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,name,department,description,summary")
    );
    assert_eq!(
        lines.next(),
        Some("1,2024-01-01,Alice,Engineering,fix bug,fixed login bug")
    );
    assert_eq!(lines.next(), Some("2,2024-01-02,Bob,Sales,,"));
}

#[test]
fn test_export_json_contains_all_records() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    wsm()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = value.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], 1);
    assert_eq!(arr[0]["name"], "Alice");
    assert_eq!(arr[1]["department"], "Sales");
    assert_eq!(arr[1]["summary"], "");
}

#[test]
fn test_export_invalid_format_fails() {
    let db_path = setup_test_db("export_invalid_format");
    init_db_with_data(&db_path);
    let out = temp_out("export_invalid_format", "xml");

    wsm()
        .args(["--db", &db_path, "export", "--format", "xml", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_export_non_absolute_path_fails() {
    let db_path = setup_test_db("export_non_abs");
    init_db_with_data(&db_path);

    wsm()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute"));
}

#[test]
fn test_export_force_overwrite() {
    let db_path = setup_test_db("export_force_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_force_overwrite", "csv");

    fs::write(&out, "OLD_CONTENT").expect("create file");

    wsm()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_ne!(content, "OLD_CONTENT");
    assert!(content.contains("Alice"));
}

#[test]
fn test_export_cancel_overwrite_keeps_file() {
    let db_path = setup_test_db("export_cancel_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_cancel_overwrite", "json");

    fs::write(&out, "ORIGINAL").expect("create file");

    wsm()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read file"), "ORIGINAL");
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);
    let out = temp_out("backup_plain", "sqlite");

    wsm()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let records = common::load_records(&out);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice");
}

#[test]
fn test_backup_compressed_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);
    let out = temp_out("backup_zip", "sqlite");
    let zip_path = temp_out("backup_zip", "zip");

    wsm()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zip_path).exists());
    assert!(!std::path::Path::new(&out).exists());
}

/// Database living in its own directory, seeded with the two default records.
fn db_in_dir(name: &str) -> (std::path::PathBuf, String) {
    let mut dir = std::env::temp_dir();
    dir.push(name);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create dir");
    let db_path = dir.join("worksummary.sqlite").to_string_lossy().to_string();
    init_db_with_data(&db_path);
    (dir, db_path)
}

#[test]
fn test_backup_zip_next_to_database_keeps_database() {
    let (dir, db_path) = db_in_dir("backup_zip_same_dir");
    let zip_path = dir.join("worksummary.zip").to_string_lossy().to_string();

    wsm()
        .args(["--db", &db_path, "backup", "--file", &zip_path, "--compress"])
        .assert()
        .success();

    assert!(std::path::Path::new(&zip_path).exists());
    assert_eq!(common::load_records(&db_path).len(), 2);
}

#[test]
fn test_backup_compress_with_database_name_keeps_database() {
    let (dir, db_path) = db_in_dir("backup_zip_db_name");

    wsm()
        .args(["--db", &db_path, "backup", "--file", &db_path, "--compress"])
        .assert()
        .success();

    assert!(dir.join("worksummary.zip").exists());
    assert_eq!(common::load_records(&db_path).len(), 2);
}

#[test]
fn test_backup_onto_database_is_refused() {
    let (_dir, db_path) = db_in_dir("backup_onto_db");

    wsm()
        .args(["--db", &db_path, "backup", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(contains("Backup error"));

    assert_eq!(common::load_records(&db_path).len(), 2);
}

#[test]
fn test_backup_asks_before_overwriting_archive() {
    let (dir, db_path) = db_in_dir("backup_zip_overwrite");
    let zip_path = dir.join("archive.zip");
    fs::write(&zip_path, "OLD_ARCHIVE").expect("create file");

    let out = dir.join("archive.sqlite").to_string_lossy().to_string();
    wsm()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&zip_path).expect("read"), "OLD_ARCHIVE");
    assert!(!std::path::Path::new(&out).exists());
    assert_eq!(common::load_records(&db_path).len(), 2);
}
