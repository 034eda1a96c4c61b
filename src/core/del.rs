use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &RecordStore, id: i64) -> AppResult<()> {
        store.delete(id)?;
        success(format!("Record #{} deleted successfully.", id));
        Ok(())
    }
}
