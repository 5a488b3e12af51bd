use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        set,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(path, cfg)?;
        }

        if *check {
            ConfigLogic::check(path)?;
        }

        if *migrate {
            let added = ConfigLogic::migrate(path)?;
            if !added.is_empty() {
                audit(cfg, &format!("Added keys: {}", added.join(", ")));
            }
        }

        if let Some(assignment) = set {
            let msg = ConfigLogic::set(path, assignment)?;
            audit(cfg, &msg);
        }

        if *edit_config {
            ConfigLogic::edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// Record a config change in the audit log when the database is reachable.
fn audit(cfg: &Config, message: &str) {
    if Path::new(&cfg.database).exists()
        && let Ok(pool) = DbPool::new(&cfg.database)
    {
        ttlog_quiet(&pool.conn, "config", "", message);
    }
}
