use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_source::EntrySource;
use crate::models::training_log::{TrainingLogEntry, TrainingLogRecord};
use rusqlite::{Connection, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, person, date, flight_duration, source, created_at FROM training_logs";

pub fn map_row(row: &Row) -> Result<TrainingLogRecord> {
    let source_str: String = row.get("source")?;
    let source = EntrySource::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid source: {}", source_str))),
        )
    })?;

    Ok(TrainingLogRecord {
        id: row.get("id")?,
        person: row.get("person")?,
        entry: TrainingLogEntry {
            date: row.get("date")?,
            flight_duration: row.get("flight_duration")?,
        },
        source,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_record(conn: &Connection, rec: &TrainingLogRecord) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO training_logs (person, date, flight_duration, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![
        rec.person,
        rec.entry.date,
        rec.entry.flight_duration,
        rec.source.to_db_str(),
        rec.created_at,
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Insert all records atomically; nothing is stored if one insert fails.
pub fn insert_records(pool: &mut DbPool, records: &[TrainingLogRecord]) -> AppResult<usize> {
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        for rec in records {
            insert_record(&tx, rec)?;
        }
        tx.commit()?;
        Ok(records.len())
    })
}

fn collect(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<TrainingLogRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full training log of one person, oldest first.
pub fn load_records_for_person(pool: &DbPool, person: &str) -> AppResult<Vec<TrainingLogRecord>> {
    collect(
        &pool.conn,
        &format!("{SELECT_COLUMNS} WHERE person = ?1 ORDER BY date ASC, id ASC"),
        &[&person],
    )
}

pub fn load_all_records(pool: &DbPool) -> AppResult<Vec<TrainingLogRecord>> {
    collect(
        &pool.conn,
        &format!("{SELECT_COLUMNS} ORDER BY person ASC, date ASC, id ASC"),
        &[],
    )
}

/// Entries only, as handed to the calculator.
pub fn load_entries_for_person(pool: &DbPool, person: &str) -> AppResult<Vec<TrainingLogEntry>> {
    Ok(load_records_for_person(pool, person)?
        .into_iter()
        .map(|r| r.entry)
        .collect())
}

pub fn list_people(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT DISTINCT person FROM training_logs ORDER BY person ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM training_logs", [], |row| row.get(0))?)
}
