use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { person, file } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        ImportLogic::import_file(&mut pool, person, Path::new(file))?;
    }
    Ok(())
}
