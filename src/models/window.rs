use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rolling lookback period, a whole number of 24-hour days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LookbackWindow {
    days: u32,
}

impl LookbackWindow {
    pub const DAILY: LookbackWindow = LookbackWindow { days: 1 };
    pub const WEEKLY: LookbackWindow = LookbackWindow { days: 7 };
    pub const MONTHLY: LookbackWindow = LookbackWindow { days: 30 };

    pub fn days(days: u32) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::InvalidWindow(days));
        }
        Ok(Self { days })
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }

    /// Earliest instant covered by the window ending at `now`,
    /// saturating at the first representable date.
    pub fn start(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(self.duration())
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 1 {
            write!(f, "24h")
        } else {
            write!(f, "{}d", self.days)
        }
    }
}

/// Whether an entry dated exactly `now - window` belongs to the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowBoundary {
    #[default]
    Inclusive,
    Exclusive,
}

impl WindowBoundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowBoundary::Inclusive => "inclusive",
            WindowBoundary::Exclusive => "exclusive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "inclusive" => Some(WindowBoundary::Inclusive),
            "exclusive" => Some(WindowBoundary::Exclusive),
            _ => None,
        }
    }

    /// `true` when `at` lies in the window `[start, now]` (or `(start, now]`).
    pub fn contains(&self, start: NaiveDateTime, now: NaiveDateTime, at: NaiveDateTime) -> bool {
        if at > now {
            return false;
        }
        match self {
            WindowBoundary::Inclusive => at >= start,
            WindowBoundary::Exclusive => at > start,
        }
    }
}
