use std::env;
use std::fs;
use std::path::PathBuf;
use worksummary::AppError;
use worksummary::config::Config;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worksummary.conf", name));
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let mut path: PathBuf = env::temp_dir();
    path.push("config_missing_worksummary.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.max_column_width, 30);
    assert_eq!(cfg.separator_char, "-");
    assert!(cfg.show_list_after_change);
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let path = temp_conf(
        "config_partial",
        "database: /tmp/partial.sqlite\nshow_list_after_change: false\n",
    );

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/partial.sqlite");
    assert!(!cfg.show_list_after_change);
    assert_eq!(cfg.max_column_width, 30);
}

#[test]
fn test_unparseable_file_is_config_error() {
    let path = temp_conf("config_broken", "max_column_width: [not, a, number\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {err:?}");
    assert!(err.to_string().contains("config_broken_worksummary.conf"));
}

#[test]
fn test_save_then_load_keeps_values() {
    let mut path: PathBuf = env::temp_dir();
    path.push("config_saved_worksummary.conf");

    let cfg = Config {
        database: "/tmp/saved.sqlite".into(),
        separator_char: "=".into(),
        max_column_width: 12,
        show_list_after_change: false,
    };
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.database, "/tmp/saved.sqlite");
    assert_eq!(loaded.separator_char, "=");
    assert_eq!(loaded.max_column_width, 12);
    assert!(!loaded.show_list_after_change);
}
