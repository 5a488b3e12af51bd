use crate::db::pool::DbPool;
use crate::db::queries::{count_records, list_people, load_all_records};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::hours2readable;
use std::fs;

/// Summary numbers shown by `db --info`.
#[derive(Debug, Default)]
pub struct DbInfo {
    pub file_size: u64,
    pub total_entries: i64,
    pub people: usize,
    pub invalid_dates: usize,
    pub total_hours: f64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect_db_info(pool: &DbPool, db_path: &str) -> AppResult<DbInfo> {
    let records = load_all_records(pool)?;

    let mut valid: Vec<_> = records
        .iter()
        .filter_map(|r| r.entry.instant())
        .collect();
    valid.sort();

    Ok(DbInfo {
        file_size: fs::metadata(db_path).map(|m| m.len()).unwrap_or(0),
        total_entries: count_records(&pool.conn)?,
        people: list_people(pool)?.len(),
        invalid_dates: records.len() - valid.len(),
        total_hours: records
            .iter()
            .filter_map(|r| r.entry.countable_hours())
            .sum(),
        first_date: valid.first().map(|d| d.date().to_string()),
        last_date: valid.last().map(|d| d.date().to_string()),
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let info = collect_db_info(pool, db_path)?;
    let file_mb = (info.file_size as f64) / (1024.0 * 1024.0);
    let dash = || format!("{GREY}--{RESET}");

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Training log entries:{} {}{}{}",
        CYAN, RESET, GREEN, info.total_entries, RESET
    );
    println!("{}• People:{} {}", CYAN, RESET, info.people);
    println!(
        "{}• Logged flight time:{} {}",
        CYAN,
        RESET,
        hours2readable(info.total_hours, false)
    );
    if info.invalid_dates > 0 {
        println!(
            "{}• Entries with unusable dates:{} {}{}{}",
            CYAN, RESET, YELLOW, info.invalid_dates, RESET
        );
    }

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", info.first_date.unwrap_or_else(dash));
    println!("    to:   {}", info.last_date.unwrap_or_else(dash));
    println!();

    Ok(())
}
