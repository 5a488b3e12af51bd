//! Threshold evaluation: hours vs. limit → percentage and risk band.

use crate::models::accumulation::AccumulationResult;
use crate::models::risk_band::RiskBand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub percentage: f64,
    pub band: RiskBand,
}

impl Evaluation {
    /// Result returned when no usable limit exists.
    pub const UNDEFINED: Evaluation = Evaluation {
        percentage: 0.0,
        band: RiskBand::Undefined,
    };
}

/// A limit is usable only when it is finite and strictly positive.
pub fn usable_limit(limit_hours: Option<f64>) -> Option<f64> {
    limit_hours.filter(|l| l.is_finite() && *l > 0.0)
}

/// Percentage of `limit_hours` consumed by `window_hours`, unclamped.
///
/// Missing, zero, negative or non-finite limits yield [`Evaluation::UNDEFINED`].
pub fn evaluate(window_hours: f64, limit_hours: Option<f64>) -> Evaluation {
    let Some(limit) = usable_limit(limit_hours) else {
        return Evaluation::UNDEFINED;
    };

    let percentage = window_hours / limit * 100.0;
    if !percentage.is_finite() {
        return Evaluation::UNDEFINED;
    }

    Evaluation {
        percentage,
        band: RiskBand::from_percentage(percentage),
    }
}

/// Full triple for one window.
pub fn evaluate_window(window_hours: f64, limit_hours: Option<f64>) -> AccumulationResult {
    let eval = evaluate(window_hours, limit_hours);

    AccumulationResult {
        window_hours,
        limit_hours: usable_limit(limit_hours).unwrap_or(0.0),
        percentage: eval.percentage,
        band: eval.band,
    }
}
