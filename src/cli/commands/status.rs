use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { person, now, json } = cmd {
        let now = match now {
            Some(s) => date::parse_now(s)?,
            None => date::now(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let status = StatusLogic::compute(&pool, cfg, person, now, *json)?;

        if *json {
            println!("{}", StatusLogic::to_json(&status)?);
        } else {
            StatusLogic::print(person, &status, cfg.show_bars);
        }
    }
    Ok(())
}
