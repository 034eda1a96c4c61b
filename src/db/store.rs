//! Record store: owns the SQLite connection holding the `work_summary` table.
//!
//! One handle is opened per session and passed explicitly to whoever needs
//! it. A single writer is assumed; no locking beyond SQLite's own is done.

use crate::db::initialize::init_db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{NewRecord, RecordUpdate, WorkRecord};
use rusqlite::Connection;
use std::path::Path;

pub struct RecordStore {
    pub conn: Connection,
}

impl RecordStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Close the handle, surfacing any error SQLite reports on close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }

    /// Store a new record exactly as given and return its freshly assigned id.
    pub fn create(&self, rec: &NewRecord) -> AppResult<i64> {
        rec.validate()?;

        Ok(queries::insert_record(&self.conn, rec)?)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> AppResult<Vec<WorkRecord>> {
        Ok(queries::load_all(&self.conn)?)
    }

    pub fn get(&self, id: i64) -> AppResult<WorkRecord> {
        queries::load_by_id(&self.conn, id)?.ok_or(AppError::NotFound(id))
    }

    /// Overwrite every field but the id. Validation runs before the lookup.
    pub fn update(&self, upd: &RecordUpdate) -> AppResult<()> {
        upd.record.validate()?;

        match queries::update_record(&self.conn, upd.id, &upd.record)? {
            0 => Err(AppError::NotFound(upd.id)),
            _ => Ok(()),
        }
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        match queries::delete_record(&self.conn, id)? {
            0 => Err(AppError::NotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn count(&self) -> AppResult<i64> {
        Ok(queries::count_records(&self.conn)?)
    }
}
