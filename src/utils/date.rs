use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Wall-clock "now" used when the caller does not pin it.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a training-log date string to a wall-clock instant.
///
/// Accepted: `YYYY-MM-DD` (start of day), `YYYY-MM-DDTHH:MM[:SS]` (also with a
/// space), RFC 3339 (local wall-clock part as written, offset ignored).
pub fn parse_entry_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a `--now` override; same formats as entry dates.
pub fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    parse_entry_instant(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Bounds (first day, last day) of `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(first) = parse_date(&format!("{p}-01")) {
        return Ok((first, last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

/// Resolve a `--period` value into an inclusive date range.
///
/// `None` means no filtering (`all`). Without a value the current month is used.
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(p) = period else {
        let t = today();
        return period_bounds(&t.format("%Y-%m").to_string()).map(Some);
    };

    if p == "all" {
        return Ok(None);
    }

    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = period_bounds(start)?;
        let (_, e) = period_bounds(end)?;
        if s > e {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        return Ok(Some((s, e)));
    }

    period_bounds(p).map(Some)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
