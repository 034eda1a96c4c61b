use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let store = RecordStore::open(&cfg.database)?;
        ListLogic::print_all(&store, cfg)?;
    }
    Ok(())
}
