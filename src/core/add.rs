use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::models::entry_source::EntrySource;
use crate::models::training_log::{TrainingLogEntry, TrainingLogRecord};
use crate::ui::messages::success;
use crate::utils::date::parse_entry_instant;
use crate::utils::hours2readable;

/// Longest single flight accepted from the command line.
pub const MAX_FLIGHT_HOURS: f64 = 24.0;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Check a CLI entry before it reaches the store.
    pub fn validate(person: &str, date: &str, hours: f64) -> AppResult<TrainingLogEntry> {
        if person.trim().is_empty() {
            return Err(AppError::Other("person name must not be empty".into()));
        }

        let date = date.trim();
        if parse_entry_instant(date).is_none() {
            return Err(AppError::InvalidDate(date.to_string()));
        }

        if !hours.is_finite() || hours <= 0.0 || hours > MAX_FLIGHT_HOURS {
            return Err(AppError::InvalidDuration(format!(
                "{hours} (expected more than 0 and at most {MAX_FLIGHT_HOURS} hours)"
            )));
        }

        Ok(TrainingLogEntry::new(date, hours))
    }

    /// Append one flight to `person`'s training log. Returns the new row id.
    pub fn apply(pool: &mut DbPool, person: &str, date: &str, hours: f64) -> AppResult<i64> {
        let entry = Self::validate(person, date, hours)?;
        let person = person.trim();
        let record = TrainingLogRecord::new(person, entry, EntrySource::Cli);

        let id = insert_record(&pool.conn, &record)?;

        let msg = format!(
            "Added {} on {} for {}",
            hours2readable(hours, false),
            record.date_display(),
            person
        );
        ttlog_quiet(&pool.conn, "add", person, &msg);
        success(msg);

        Ok(id)
    }
}
