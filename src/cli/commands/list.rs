use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { person, period } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let records = ListLogic::select(&pool, person.as_deref(), period.as_deref())?;
        ListLogic::print(&records);
    }
    Ok(())
}
