use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

pub const TABLE_NAME: &str = "work_summary";

const CREATE_WORK_SUMMARY: &str = r#"
    CREATE TABLE IF NOT EXISTS work_summary (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        date        TEXT NOT NULL,
        name        TEXT NOT NULL,
        department  TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        summary     TEXT NOT NULL DEFAULT ''
    );
"#;

/// Initialize the database.
/// Safe to call on every open: an existing table is left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_WORK_SUMMARY)?;
    Ok(())
}

/// Check if the `work_summary` table exists.
pub fn table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt
        .query_row([TABLE_NAME], |row| row.get(0))
        .optional()?;
    Ok(exists.is_some())
}
