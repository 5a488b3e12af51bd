use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_for_person;
use crate::errors::AppResult;
use crate::models::accumulation::{AccumulationResult, DutyStatus};
use crate::models::duty_limits::DutyPeriod;
use crate::models::risk_band::RiskBand;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, paint};
use crate::utils::formatting::{format_percentage, progress_bar};
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

const BAR_WIDTH: usize = 20;

pub struct StatusLogic;

impl StatusLogic {
    /// Duty status of `person` at `now`, using the configured limits and boundary.
    ///
    /// `quiet` suppresses console notices so stdout stays machine-readable.
    pub fn compute(
        pool: &DbPool,
        cfg: &Config,
        person: &str,
        now: NaiveDateTime,
        quiet: bool,
    ) -> AppResult<DutyStatus> {
        let entries = load_entries_for_person(pool, person.trim())?;
        if entries.is_empty() && !quiet {
            warning(format!("No training log entries for {}", person.trim()));
        }

        Ok(Core::duty_status(
            &entries,
            &cfg.limits(),
            now,
            cfg.window_boundary,
        ))
    }

    fn row(period: DutyPeriod, r: &AccumulationResult, show_bars: bool) -> Vec<String> {
        let color = r.band.color();
        let (limit, used) = if r.band == RiskBand::Undefined {
            ("n/a".to_string(), "n/a".to_string())
        } else {
            (
                hours2readable(r.limit_hours, false),
                format_percentage(r.percentage),
            )
        };

        let mut row = vec![
            format!("{} ({})", period.label(), period.window()),
            hours2readable(r.window_hours, false),
            colorize_optional(&limit),
            colorize_optional(&used),
            paint(color, r.band.label()),
        ];
        if show_bars {
            row.push(paint(color, &progress_bar(r.percentage, BAR_WIDTH)));
        }
        row
    }

    pub fn render(status: &DutyStatus, show_bars: bool) -> String {
        let mut columns = vec![
            Column::left("Window"),
            Column::right("Flown"),
            Column::right("Limit"),
            Column::right("Used"),
            Column::left("Risk"),
        ];
        if show_bars {
            columns.push(Column::left(""));
        }

        let mut table = Table::new(columns);
        for (period, r) in [
            (DutyPeriod::Daily, &status.daily),
            (DutyPeriod::Weekly, &status.weekly),
            (DutyPeriod::Monthly, &status.monthly),
        ] {
            table.add_row(Self::row(period, r, show_bars));
        }

        table.render()
    }

    pub fn print(person: &str, status: &DutyStatus, show_bars: bool) {
        header(format!(
            "Duty status for {} at {}",
            person.trim(),
            status.now.format("%Y-%m-%d %H:%M")
        ));
        print!("{}", Self::render(status, show_bars));

        let worst = status.worst_band();
        println!(
            "\nOverall risk: {}",
            paint(worst.color(), &worst.label().to_uppercase())
        );
    }

    pub fn to_json(status: &DutyStatus) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(status)?)
    }
}
