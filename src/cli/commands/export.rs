use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        person,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, person.as_deref(), *force)?;
    }
    Ok(())
}
