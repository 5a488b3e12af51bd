use crate::core::calculator::{accumulate, threshold};
use crate::models::accumulation::{AccumulationResult, DutyStatus};
use crate::models::duty_limits::{DutyLimits, DutyPeriod};
use crate::models::training_log::TrainingLogEntry;
use crate::models::window::WindowBoundary;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Evaluate one standard duty window.
    pub fn evaluate_period(
        entries: &[TrainingLogEntry],
        limits: &DutyLimits,
        period: DutyPeriod,
        now: NaiveDateTime,
        boundary: WindowBoundary,
    ) -> AccumulationResult {
        let hours = accumulate::accumulate_with(entries, period.window(), now, boundary);
        threshold::evaluate_window(hours, limits.limit_for(period))
    }

    /// Daily / weekly / monthly status anchored at `now`.
    pub fn duty_status(
        entries: &[TrainingLogEntry],
        limits: &DutyLimits,
        now: NaiveDateTime,
        boundary: WindowBoundary,
    ) -> DutyStatus {
        DutyStatus {
            now,
            daily: Self::evaluate_period(entries, limits, DutyPeriod::Daily, now, boundary),
            weekly: Self::evaluate_period(entries, limits, DutyPeriod::Weekly, now, boundary),
            monthly: Self::evaluate_period(entries, limits, DutyPeriod::Monthly, now, boundary),
        }
    }
}
