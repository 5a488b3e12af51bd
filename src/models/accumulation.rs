use super::risk_band::RiskBand;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Hours flown in one window compared with its limit. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccumulationResult {
    pub window_hours: f64,
    /// 0.0 when no usable limit is configured (band is then `Undefined`).
    pub limit_hours: f64,
    pub percentage: f64,
    pub band: RiskBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct DutyStatus {
    pub now: NaiveDateTime,
    pub daily: AccumulationResult,
    pub weekly: AccumulationResult,
    pub monthly: AccumulationResult,
}

impl DutyStatus {
    /// Highest band among the three windows (`Undefined` ranks lowest).
    pub fn worst_band(&self) -> RiskBand {
        [self.daily.band, self.weekly.band, self.monthly.band]
            .into_iter()
            .max_by_key(|b| match b {
                RiskBand::Undefined => 0,
                RiskBand::Low => 1,
                RiskBand::Medium => 2,
                RiskBand::High => 3,
                RiskBand::Critical => 4,
            })
            .unwrap_or(RiskBand::Undefined)
    }
}
