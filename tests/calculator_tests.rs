use chrono::{NaiveDate, NaiveDateTime};
use rdutylog::core::calculator::accumulate::{accumulate, accumulate_with};
use rdutylog::core::calculator::threshold::{Evaluation, evaluate, evaluate_window};
use rdutylog::core::logic::Core;
use rdutylog::errors::AppError;
use rdutylog::models::duty_limits::DutyLimits;
use rdutylog::models::risk_band::RiskBand;
use rdutylog::models::training_log::TrainingLogEntry;
use rdutylog::models::window::{LookbackWindow, WindowBoundary};
use rdutylog::utils::date::parse_entry_instant;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn now() -> NaiveDateTime {
    at(2026, 3, 15, 14, 0)
}

fn week() -> LookbackWindow {
    LookbackWindow::WEEKLY
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_log_accumulates_zero() {
    for days in [1, 7, 30, 365] {
        let w = LookbackWindow::days(days).unwrap();
        assert_eq!(accumulate(&[], w, now()), 0.0);
    }
}

#[test]
fn test_today_counted_ten_days_ago_not_in_week() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-15", 2.0),
        TrainingLogEntry::new("2026-03-05", 5.0),
    ];

    assert_close(accumulate(&entries, week(), now()), 2.0);
}

#[test]
fn test_unordered_entries_are_summed() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-14", 1.0),
        TrainingLogEntry::new("2026-03-10", 2.5),
        TrainingLogEntry::new("2026-03-15T09:30", 0.5),
        TrainingLogEntry::new("2026-03-11", 1.25),
    ];

    assert_close(accumulate(&entries, week(), now()), 5.25);
}

#[test]
fn test_boundary_inclusive_counts_entry_exactly_window_days_ago() {
    let entries = vec![TrainingLogEntry::new("2026-03-08T14:00", 3.0)];

    assert_close(
        accumulate_with(&entries, week(), now(), WindowBoundary::Inclusive),
        3.0,
    );
    // default is inclusive
    assert_close(accumulate(&entries, week(), now()), 3.0);
}

#[test]
fn test_boundary_exclusive_drops_entry_exactly_window_days_ago() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-08T14:00", 3.0),
        TrainingLogEntry::new("2026-03-08T14:01", 1.0),
    ];

    assert_close(
        accumulate_with(&entries, week(), now(), WindowBoundary::Exclusive),
        1.0,
    );
}

#[test]
fn test_entry_one_minute_before_window_is_excluded() {
    let entries = vec![TrainingLogEntry::new("2026-03-08T13:59", 3.0)];
    assert_eq!(accumulate(&entries, week(), now()), 0.0);
}

#[test]
fn test_window_is_fixed_24h_multiples() {
    // 30 days before 2026-03-15 14:00 is 2026-02-13 14:00
    let entries = vec![
        TrainingLogEntry::new("2026-02-13T14:00", 1.0),
        TrainingLogEntry::new("2026-02-13", 4.0),
    ];
    assert_close(accumulate(&entries, LookbackWindow::MONTHLY, now()), 1.0);
}

#[test]
fn test_malformed_and_missing_dates_are_skipped() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-14", 1.0),
        TrainingLogEntry::new("not-a-date", 5.0),
        TrainingLogEntry::new("2026-02-30", 5.0),
        TrainingLogEntry::new("", 5.0),
        TrainingLogEntry {
            date: None,
            flight_duration: 5.0,
        },
    ];

    assert_close(accumulate(&entries, week(), now()), 1.0);
}

#[test]
fn test_invalid_durations_are_skipped_and_sum_stays_non_negative() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-14", -4.0),
        TrainingLogEntry::new("2026-03-14", f64::NAN),
        TrainingLogEntry::new("2026-03-14", f64::INFINITY),
        TrainingLogEntry::new("2026-03-13", 0.75),
    ];

    let total = accumulate(&entries, week(), now());
    assert!(total >= 0.0);
    assert_close(total, 0.75);
}

#[test]
fn test_future_entries_are_not_counted() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-15T15:00", 2.0),
        TrainingLogEntry::new("2026-03-16", 2.0),
        TrainingLogEntry::new("2026-03-15T13:00", 1.0),
    ];
    assert_close(accumulate(&entries, LookbackWindow::DAILY, now()), 1.0);
}

#[test]
fn test_accumulation_is_monotonic_in_window() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-15T08:00", 1.0),
        TrainingLogEntry::new("2026-03-13", 2.0),
        TrainingLogEntry::new("2026-03-01", 3.0),
        TrainingLogEntry::new("2026-02-10", 4.0),
        TrainingLogEntry::new("2025-12-24", 5.0),
        TrainingLogEntry::new("garbage", 6.0),
    ];

    let mut previous = 0.0;
    for days in 1..=120 {
        let w = LookbackWindow::days(days).unwrap();
        let total = accumulate(&entries, w, now());
        assert!(total >= 0.0);
        assert!(
            total >= previous,
            "window {days}d gave {total}, smaller than {previous}"
        );
        previous = total;
    }
    assert_close(previous, 15.0);
}

#[test]
fn test_zero_day_window_is_rejected() {
    assert!(matches!(
        LookbackWindow::days(0),
        Err(AppError::InvalidWindow(0))
    ));
    assert_eq!(LookbackWindow::days(7).unwrap(), LookbackWindow::WEEKLY);
}

#[test]
fn test_percentage_of_limit() {
    let entries = vec![TrainingLogEntry::new("2026-03-15", 1.5)];
    let hours = accumulate(&entries, LookbackWindow::DAILY, now());

    let eval = evaluate(hours, Some(8.0));
    assert_eq!(eval.percentage, 18.75);
    assert_eq!(eval.band, RiskBand::Low);
}

#[test]
fn test_percentage_is_not_clamped() {
    let eval = evaluate(12.0, Some(8.0));
    assert_eq!(eval.percentage, 150.0);
    assert_eq!(eval.band, RiskBand::Critical);
}

#[test]
fn test_zero_or_missing_limit_yields_undefined_sentinel() {
    for limit in [Some(0.0), None, Some(-5.0), Some(f64::NAN), Some(f64::INFINITY)] {
        let eval = evaluate(3.0, limit);
        assert_eq!(eval, Evaluation::UNDEFINED);
        assert!(eval.percentage.is_finite());
        assert_eq!(eval.percentage, 0.0);
    }

    let triple = evaluate_window(3.0, Some(0.0));
    assert_eq!(triple.window_hours, 3.0);
    assert_eq!(triple.limit_hours, 0.0);
    assert_eq!(triple.percentage, 0.0);
    assert_eq!(triple.band, RiskBand::Undefined);
}

#[test]
fn test_risk_band_edges() {
    assert_eq!(RiskBand::from_percentage(0.0), RiskBand::Low);
    assert_eq!(RiskBand::from_percentage(50.0), RiskBand::Low);
    assert_eq!(RiskBand::from_percentage(50.01), RiskBand::Medium);
    assert_eq!(RiskBand::from_percentage(75.0), RiskBand::Medium);
    assert_eq!(RiskBand::from_percentage(75.5), RiskBand::High);
    assert_eq!(RiskBand::from_percentage(90.0), RiskBand::High);
    assert_eq!(RiskBand::from_percentage(90.1), RiskBand::Critical);
    assert_eq!(RiskBand::from_percentage(f64::NAN), RiskBand::Undefined);
}

#[test]
fn test_duty_status_three_windows() {
    let entries = vec![
        TrainingLogEntry::new("2026-03-15T07:00", 7.0),
        TrainingLogEntry::new("2026-03-12", 10.0),
        TrainingLogEntry::new("2026-02-25", 12.0),
        TrainingLogEntry::new("2026-01-01", 50.0),
    ];

    let status = Core::duty_status(
        &entries,
        &DutyLimits::default(),
        now(),
        WindowBoundary::Inclusive,
    );

    assert_close(status.daily.window_hours, 7.0);
    assert_eq!(status.daily.limit_hours, 8.0);
    assert_eq!(status.daily.percentage, 87.5);
    assert_eq!(status.daily.band, RiskBand::High);

    assert_close(status.weekly.window_hours, 17.0);
    assert_eq!(status.weekly.band, RiskBand::Medium);

    assert_close(status.monthly.window_hours, 29.0);
    assert_close(status.monthly.percentage, 29.0);
    assert_eq!(status.monthly.band, RiskBand::Low);

    assert_eq!(status.worst_band(), RiskBand::High);
}

#[test]
fn test_duty_status_with_unset_limit() {
    let entries = vec![TrainingLogEntry::new("2026-03-15", 2.0)];
    let limits = DutyLimits {
        daily: None,
        weekly: Some(0.0),
        monthly: Some(100.0),
    };

    let status = Core::duty_status(&entries, &limits, now(), WindowBoundary::Inclusive);

    assert_eq!(status.daily.band, RiskBand::Undefined);
    assert_eq!(status.weekly.band, RiskBand::Undefined);
    assert_close(status.monthly.percentage, 2.0);
    assert_eq!(status.worst_band(), RiskBand::Low);
}

#[test]
fn test_entry_date_formats() {
    assert_eq!(parse_entry_instant("2026-03-15"), Some(at(2026, 3, 15, 0, 0)));
    assert_eq!(
        parse_entry_instant("2026-03-15T09:45"),
        Some(at(2026, 3, 15, 9, 45))
    );
    assert_eq!(
        parse_entry_instant("2026-03-15 09:45:00"),
        Some(at(2026, 3, 15, 9, 45))
    );
    // offset is dropped, wall-clock time kept as written
    assert_eq!(
        parse_entry_instant("2026-03-15T10:00:00+02:00"),
        Some(at(2026, 3, 15, 10, 0))
    );
    assert_eq!(
        parse_entry_instant("2026-03-15T10:00:00.000Z"),
        Some(at(2026, 3, 15, 10, 0))
    );
    assert_eq!(parse_entry_instant("15/03/2026"), None);
    assert_eq!(parse_entry_instant("   "), None);
}

#[test]
fn test_empty_window_is_positive_zero() {
    assert!(accumulate(&[], week(), now()).is_sign_positive());

    let old = vec![TrainingLogEntry::new("2025-01-01", 4.0)];
    let hours = accumulate(&old, week(), now());
    assert!(hours.is_sign_positive());

    let r = evaluate_window(hours, Some(30.0));
    assert!(r.percentage.is_sign_positive());
    assert_eq!(r.band, RiskBand::Low);
}

#[test]
fn test_window_start_saturates_at_earliest_date() {
    let earliest = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(LookbackWindow::MONTHLY.start(earliest), NaiveDateTime::MIN);

    let entries = vec![TrainingLogEntry::new("2026-03-15", 2.0)];
    assert_eq!(accumulate(&entries, LookbackWindow::DAILY, earliest), 0.0);
    assert_eq!(
        accumulate_with(&entries, week(), earliest, WindowBoundary::Exclusive),
        0.0
    );

    let status = Core::duty_status(&entries, &DutyLimits::default(), earliest, WindowBoundary::Inclusive);
    assert_eq!(status.worst_band(), RiskBand::Low);
}
