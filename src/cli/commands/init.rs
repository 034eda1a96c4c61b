use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its `work_summary` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing worksummary…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    let store = RecordStore::open(&db_path)?;

    info(format!("{} record(s) currently stored.", store.count()?));

    store.close()?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
