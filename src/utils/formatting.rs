//! Formatting utilities used for CLI and export outputs.

/// Decimal hours → "02h 30m" (or "02:30" when `short`).
pub fn hours2readable(hours: f64, short: bool) -> String {
    if !hours.is_finite() {
        return "--".to_string();
    }

    let total = (hours.abs() * 60.0).round() as i64;
    let sign = if hours < 0.0 && total > 0 { "-" } else { "" };
    let (h, m) = (total / 60, total % 60);

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}

/// Fixed-width bar filled proportionally to `percentage` (capped at full).
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let ratio = if percentage.is_finite() {
        (percentage / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}
