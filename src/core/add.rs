use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::NewRecord;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &RecordStore, record: &NewRecord) -> AppResult<i64> {
        let id = store.create(record)?;
        success(format!("Record #{} added successfully.", id));
        Ok(id)
    }
}
