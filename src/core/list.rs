use crate::db::pool::DbPool;
use crate::db::queries::{load_all_records, load_records_for_person};
use crate::errors::AppResult;
use crate::models::training_log::TrainingLogRecord;
use crate::utils::colors::{GREY, paint};
use crate::utils::date::resolve_period;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Records for `person` (or everybody) inside `period`.
    ///
    /// With `all` nothing is filtered out, rows with unusable dates included;
    /// any date filter drops them since they belong to no period.
    pub fn select(
        pool: &DbPool,
        person: Option<&str>,
        period: Option<&str>,
    ) -> AppResult<Vec<TrainingLogRecord>> {
        let bounds = resolve_period(period)?;
        let records = match person {
            Some(p) => load_records_for_person(pool, p.trim())?,
            None => load_all_records(pool)?,
        };

        Ok(records
            .into_iter()
            .filter(|r| match bounds {
                None => true,
                Some((start, end)) => r
                    .entry
                    .instant()
                    .map(|at| in_range(at.date(), start, end))
                    .unwrap_or(false),
            })
            .collect())
    }

    pub fn render(records: &[TrainingLogRecord]) -> String {
        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("Person"),
            Column::left("Date"),
            Column::right("Hours"),
            Column::left("Source"),
        ]);

        for r in records {
            let date = if r.has_valid_date() {
                r.date_display().to_string()
            } else {
                paint(GREY, &format!("{} (invalid)", r.date_display()))
            };

            table.add_row(vec![
                r.id.to_string(),
                r.person.clone(),
                date,
                hours2readable(r.entry.flight_duration, true),
                r.source.to_db_str().to_string(),
            ]);
        }

        table.render()
    }

    pub fn print(records: &[TrainingLogRecord]) {
        if records.is_empty() {
            println!("No training log entries for the selected period.");
            return;
        }

        print!("{}", Self::render(records));

        let total: f64 = records
            .iter()
            .filter(|r| r.has_valid_date())
            .filter_map(|r| r.entry.countable_hours())
            .sum();
        println!(
            "\n{} entries, total {}",
            records.len(),
            hours2readable(total, false)
        );
    }
}

fn in_range(d: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    d >= start && d <= end
}
