use crate::cli::commands::refresh;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::NewRecord;
use crate::utils::date;

/// Add a new work record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: d,
        name,
        department,
        description,
        summary,
    } = cmd
    {
        // Missing required fields are left empty and rejected by the store,
        // so the user gets one message naming all of them.
        let record = NewRecord {
            date: d.clone().unwrap_or_else(date::today_str),
            name: name.clone().unwrap_or_default(),
            department: department.clone().unwrap_or_default(),
            description: description.clone().unwrap_or_default(),
            summary: summary.clone().unwrap_or_default(),
        };

        let store = RecordStore::open(&cfg.database)?;
        AddLogic::apply(&store, &record)?;
        refresh(&store, cfg)?;
    }

    Ok(())
}
