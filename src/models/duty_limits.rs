use super::window::LookbackWindow;
use serde::Serialize;

/// Operator-configured flight-hour caps. `None` = not configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DutyLimits {
    pub daily: Option<f64>,
    pub weekly: Option<f64>,
    pub monthly: Option<f64>,
}

impl DutyLimits {
    pub const DEFAULT_DAILY: f64 = 8.0;
    pub const DEFAULT_WEEKLY: f64 = 30.0;
    pub const DEFAULT_MONTHLY: f64 = 100.0;

    pub fn limit_for(&self, period: DutyPeriod) -> Option<f64> {
        match period {
            DutyPeriod::Daily => self.daily,
            DutyPeriod::Weekly => self.weekly,
            DutyPeriod::Monthly => self.monthly,
        }
    }
}

impl Default for DutyLimits {
    fn default() -> Self {
        Self {
            daily: Some(Self::DEFAULT_DAILY),
            weekly: Some(Self::DEFAULT_WEEKLY),
            monthly: Some(Self::DEFAULT_MONTHLY),
        }
    }
}

/// The three standard duty windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl DutyPeriod {
    pub fn window(&self) -> LookbackWindow {
        match self {
            DutyPeriod::Daily => LookbackWindow::DAILY,
            DutyPeriod::Weekly => LookbackWindow::WEEKLY,
            DutyPeriod::Monthly => LookbackWindow::MONTHLY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyPeriod::Daily => "Daily",
            DutyPeriod::Weekly => "Weekly",
            DutyPeriod::Monthly => "Monthly",
        }
    }
}
