use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let record = store.get(*id)?;
        ListLogic::print_one(&record);
    }
    Ok(())
}
