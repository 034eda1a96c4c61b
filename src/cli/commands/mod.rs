pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod update;

use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

/// Re-read the whole table after a mutation, like the form view did.
pub(crate) fn refresh(store: &RecordStore, cfg: &Config) -> AppResult<()> {
    if cfg.show_list_after_change {
        println!();
        ListLogic::print_all(store, cfg)?;
    }
    Ok(())
}
