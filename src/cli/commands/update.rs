use crate::cli::commands::refresh;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::{FieldOverrides, UpdateLogic};
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        date,
        name,
        department,
        description,
        summary,
    } = cmd
    {
        let fields = FieldOverrides {
            date: date.clone(),
            name: name.clone(),
            department: department.clone(),
            description: description.clone(),
            summary: summary.clone(),
        };

        if fields.is_empty() {
            warning("Nothing to update: pass at least one of --date, --name, --dept, --desc, --summary.");
            return Ok(());
        }

        let store = RecordStore::open(&cfg.database)?;
        UpdateLogic::apply(&store, *id, &fields)?;
        refresh(&store, cfg)?;
    }

    Ok(())
}
