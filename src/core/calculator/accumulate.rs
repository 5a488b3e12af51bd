//! Flight-time accumulation over a rolling lookback window.

use crate::models::training_log::TrainingLogEntry;
use crate::models::window::{LookbackWindow, WindowBoundary};
use chrono::NaiveDateTime;

/// Total hours flown within `window` ending at `now` (inclusive boundary).
pub fn accumulate(entries: &[TrainingLogEntry], window: LookbackWindow, now: NaiveDateTime) -> f64 {
    accumulate_with(entries, window, now, WindowBoundary::Inclusive)
}

/// Same as [`accumulate`] with an explicit boundary rule.
///
/// Entries without a parseable date, with a negative or non-finite duration,
/// or dated after `now` are skipped.
pub fn accumulate_with(
    entries: &[TrainingLogEntry],
    window: LookbackWindow,
    now: NaiveDateTime,
    boundary: WindowBoundary,
) -> f64 {
    let start = window.start(now);

    entries
        .iter()
        .filter_map(|e| Some((e.instant()?, e.countable_hours()?)))
        .filter(|(at, _)| boundary.contains(start, now, *at))
        .fold(0.0, |acc, (_, hours)| acc + hours)
}
