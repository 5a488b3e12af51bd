//! Schema migrations.
//!
//! Each migration has a version string; once applied it is recorded in the
//! `log` table as a `migration_applied` row targeting that version.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_training_logs",
        description: "Created training_logs table",
        apply: create_training_logs,
    },
    Migration {
        version: "20261004_0002_index_training_logs_person",
        description: "Added (person, date) index on training_logs",
        apply: index_training_logs_person,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_training_logs(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS training_logs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            person          TEXT NOT NULL,
            date            TEXT,
            flight_duration REAL NOT NULL,
            source          TEXT NOT NULL DEFAULT 'cli' CHECK(source IN ('cli','import')),
            created_at      TEXT NOT NULL
        );
        "#,
    )
}

fn index_training_logs_person(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_training_logs_person_date ON training_logs(person, date);",
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet recorded as applied.
pub fn pending_versions(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each in its own transaction.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        (m.apply)(&tx).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
