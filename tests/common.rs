#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wsm() -> Command {
    cargo_bin_cmd!("worksummary")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worksummary.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add the two records used by most tests:
/// #1 Alice / Engineering and #2 Bob / Sales.
pub fn init_db_with_data(db_path: &str) {
    wsm()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wsm()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2024-01-01",
            "--name",
            "Alice",
            "--dept",
            "Engineering",
            "--desc",
            "fix bug",
            "--summary",
            "fixed login bug",
        ])
        .assert()
        .success();

    wsm()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2024-01-02",
            "--name",
            "Bob",
            "--dept",
            "Sales",
        ])
        .assert()
        .success();
}

/// Read the records straight from the database file.
pub fn load_records(db_path: &str) -> Vec<worksummary::WorkRecord> {
    let store = worksummary::RecordStore::open(db_path).expect("open db");
    store.list_all().expect("list records")
}
