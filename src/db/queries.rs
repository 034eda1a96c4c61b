use crate::models::{NewRecord, WorkRecord};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, date, name, department, description, summary FROM work_summary";

pub fn map_row(row: &Row) -> Result<WorkRecord> {
    Ok(WorkRecord {
        id: row.get("id")?,
        date: row.get("date")?,
        name: row.get("name")?,
        department: row.get("department")?,
        description: row.get("description")?,
        summary: row.get("summary")?,
    })
}

pub fn insert_record(conn: &Connection, rec: &NewRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO work_summary (date, name, department, description, summary)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            rec.date,
            rec.name,
            rec.department,
            rec.description,
            rec.summary
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_all(conn: &Connection) -> Result<Vec<WorkRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_by_id(conn: &Connection, id: i64) -> Result<Option<WorkRecord>> {
    conn.query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], map_row)
        .optional()
}

/// Returns the number of rows touched (0 when `id` does not exist).
pub fn update_record(conn: &Connection, id: i64, rec: &NewRecord) -> Result<usize> {
    conn.execute(
        "UPDATE work_summary
         SET date = ?1, name = ?2, department = ?3, description = ?4, summary = ?5
         WHERE id = ?6",
        params![
            rec.date,
            rec.name,
            rec.department,
            rec.description,
            rec.summary,
            id
        ],
    )
}

/// Returns the number of rows removed (0 when `id` does not exist).
pub fn delete_record(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM work_summary WHERE id = ?1", [id])
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM work_summary", [], |row| row.get(0))
}
