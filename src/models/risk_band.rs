use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, YELLOW};
use serde::Serialize;

/// Coarse fatigue-risk label derived from the share of a limit consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,      // ≤ 50%
    Medium,   // ≤ 75%
    High,     // ≤ 90%
    Critical, // > 90%
    Undefined,
}

impl RiskBand {
    /// Band for an unclamped percentage. Non-finite input is `Undefined`.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() {
            RiskBand::Undefined
        } else if pct <= 50.0 {
            RiskBand::Low
        } else if pct <= 75.0 {
            RiskBand::Medium
        } else if pct <= 90.0 {
            RiskBand::High
        } else {
            RiskBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
            RiskBand::Undefined => "undefined",
        }
    }

    /// ANSI colour of the progress indicator.
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Low => GREEN,
            RiskBand::Medium => YELLOW,
            RiskBand::High => MAGENTA,
            RiskBand::Critical => RED,
            RiskBand::Undefined => GREY,
        }
    }
}
