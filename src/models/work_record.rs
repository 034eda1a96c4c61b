use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// A stored work-summary entry (⇔ one row of `work_summary`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkRecord {
    pub id: i64,
    pub date: String,
    pub name: String,
    pub department: String,
    pub description: String,
    pub summary: String,
}

/// Input of a create operation. `description` and `summary` may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub date: String,
    pub name: String,
    pub department: String,
    pub description: String,
    pub summary: String,
}

/// Input of an update operation: every field except `id` is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub id: i64,
    pub record: NewRecord,
}

impl NewRecord {
    pub fn new(
        date: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
            department: department.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Date, name and department must be present; whitespace alone does
    /// not count. Values are never rewritten.
    pub fn validate(&self) -> AppResult<()> {
        let missing: Vec<&str> = [
            ("date", &self.date),
            ("name", &self.name),
            ("department", &self.department),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "date, name and department are required (missing: {})",
                missing.join(", ")
            )))
        }
    }
}

impl From<&WorkRecord> for NewRecord {
    fn from(r: &WorkRecord) -> Self {
        Self {
            date: r.date.clone(),
            name: r.name.clone(),
            department: r.department.clone(),
            description: r.description.clone(),
            summary: r.summary.clone(),
        }
    }
}

impl WorkRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.name.clone(),
            self.department.clone(),
            self.description.clone(),
            self.summary.clone(),
        ]
    }
}

/// Column headers, in table order.
pub const HEADERS: [&str; 6] = ["ID", "Date", "Name", "Department", "Description", "Summary"];
