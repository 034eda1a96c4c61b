use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::{NewRecord, RecordUpdate, WorkRecord};
use crate::ui::messages::success;

/// Fields given on the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct FieldOverrides {
    pub date: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
}

impl FieldOverrides {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.name.is_none()
            && self.department.is_none()
            && self.description.is_none()
            && self.summary.is_none()
    }

    /// Stored record with the given fields laid over it.
    pub fn apply_to(&self, current: &WorkRecord) -> NewRecord {
        let base = NewRecord::from(current);
        NewRecord {
            date: self.date.clone().unwrap_or(base.date),
            name: self.name.clone().unwrap_or(base.name),
            department: self.department.clone().unwrap_or(base.department),
            description: self.description.clone().unwrap_or(base.description),
            summary: self.summary.clone().unwrap_or(base.summary),
        }
    }
}

pub struct UpdateLogic;

impl UpdateLogic {
    /// Load the record, overlay `fields` and write all of it back.
    pub fn apply(store: &RecordStore, id: i64, fields: &FieldOverrides) -> AppResult<()> {
        let current = store.get(id)?;

        let update = RecordUpdate {
            id,
            record: fields.apply_to(&current),
        };
        store.update(&update)?;

        success(format!("Record #{} updated successfully.", id));
        Ok(())
    }
}
