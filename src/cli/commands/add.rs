use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Append a flight to a person's training log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        person,
        date,
        hours,
    } = cmd
    {
        // Validate before touching the database.
        AddLogic::validate(person, date, *hours)?;

        let mut pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(&mut pool, person, date, *hours)?;
    }

    Ok(())
}
