mod common;

use chrono::Timelike;
use common::{d, ev, ev_named, office_schedule, t};
use mesai::core::classifier::identify_irregularities_at;
use mesai::models::irregularity::IrregularityKind;
use mesai::models::punch_kind::PunchKind;
use mesai::models::schedule::WorkSchedule;

// "Now" far after every fixture date, so past-date rules apply.
const TODAY: &str = "2026-01-15";
const NOW_MINUTE: i64 = 20 * 60;

fn classify(
    logs: &[mesai::models::punch::PunchEvent],
    schedule: &WorkSchedule,
) -> Vec<mesai::models::irregularity::IrregularityRecord> {
    identify_irregularities_at(logs, schedule, None, None, d(TODAY), NOW_MINUTE)
}

#[test]
fn test_on_time_full_day_is_clean() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    assert!(classify(&logs, &office_schedule()).is_empty());
}

#[test]
fn test_early_departure_boundary_is_strict() {
    // Worked 09:00-17:00 with no lunch: 480 minutes, exactly the
    // expected workday (540 - 60). Early departure fires (17:00 < 18:00)
    // but short-workday must NOT (480 < 480 is false).
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].kind, IrregularityKind::EarlyDeparture);
    assert_eq!(report[0].expected.as_deref(), Some("18:00"));
    assert_eq!(report[0].actual.as_deref(), Some("17:00"));
}

#[test]
fn test_late_arrival_reports_expected_and_actual() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:25", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:30", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].kind, IrregularityKind::LateArrival);
    assert_eq!(report[0].expected.as_deref(), Some("09:00"));
    assert_eq!(report[0].actual.as_deref(), Some("09:25"));
    assert!(report[0].details.contains("09:25"));
}

#[test]
fn test_long_lunch_formats_durations() {
    // 90 minutes against the expected 60.
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:30", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:30", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    let long_lunch: Vec<_> = report
        .iter()
        .filter(|r| r.kind == IrregularityKind::LongLunch)
        .collect();
    assert_eq!(long_lunch.len(), 1);
    assert_eq!(long_lunch[0].duration.as_deref(), Some("1 saat 30 dakika"));
    assert_eq!(
        long_lunch[0].expected_duration.as_deref(),
        Some("1 saat 0 dakika")
    );
}

#[test]
fn test_missing_checkout_on_past_date() {
    let logs = vec![ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn)];

    let report = classify(&logs, &office_schedule());
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].kind, IrregularityKind::MissingCheckRecord);
    assert_eq!(report[0].expected.as_deref(), Some("Çıkış Bekleniyor"));
}

#[test]
fn test_missing_checkout_today_depends_on_work_end() {
    let logs = vec![ev("ayse", TODAY, "09:00", PunchKind::CheckIn)];
    let schedule = office_schedule();

    // Before work end: the employee may simply still be working.
    let before = identify_irregularities_at(&logs, &schedule, None, None, d(TODAY), 14 * 60);
    assert!(
        !before
            .iter()
            .any(|r| r.kind == IrregularityKind::MissingCheckRecord)
    );

    // After work end the open day becomes a missing checkout.
    let after = identify_irregularities_at(&logs, &schedule, None, None, d(TODAY), 19 * 60);
    assert!(
        after
            .iter()
            .any(|r| r.kind == IrregularityKind::MissingCheckRecord)
    );
}

#[test]
fn test_lunch_start_without_end() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    let missing: Vec<_> = report
        .iter()
        .filter(|r| r.kind == IrregularityKind::MissingLunchRecord)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].expected.as_deref(), Some("Mola Bitişi Bekleniyor"));
}

#[test]
fn test_lunch_end_without_start() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    let missing: Vec<_> = report
        .iter()
        .filter(|r| r.kind == IrregularityKind::MissingLunchRecord)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(
        missing[0].expected.as_deref(),
        Some("Mola Başlangıcı Bekleniyor")
    );
}

#[test]
fn test_short_workday_subtracts_recorded_lunch() {
    // 09:30-17:30 minus 60 minutes lunch = 420 < 480.
    let logs = vec![
        ev("ayse", "2025-06-02", "09:30", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "17:30", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    let short: Vec<_> = report
        .iter()
        .filter(|r| r.kind == IrregularityKind::ShortWorkDay)
        .collect();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].duration.as_deref(), Some("7 saat 0 dakika"));
    assert_eq!(
        short[0].expected_duration.as_deref(),
        Some("8 saat 0 dakika")
    );

    // Late arrival and early departure co-occur with the short day:
    // categories are reported independently.
    assert_eq!(report.len(), 3);
}

#[test]
fn test_corrupted_lunch_order_is_clamped_not_negative() {
    // Lunch-end before lunch-start: the clamped duration (0) is not a
    // long lunch, and the short-workday arithmetic treats lunch as 0.
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    assert!(!report.iter().any(|r| r.kind == IrregularityKind::LongLunch));
    assert!(
        !report
            .iter()
            .any(|r| r.kind == IrregularityKind::ShortWorkDay)
    );
}

#[test]
fn test_redundant_punches_collapse_to_day_markers() {
    // First check-in and last check-out win; extras are not flagged.
    let logs = vec![
        ev("ayse", "2025-06-02", "08:55", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "09:20", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "17:40", PunchKind::CheckOut),
        ev("ayse", "2025-06-02", "18:05", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    assert!(
        !report
            .iter()
            .any(|r| r.kind == IrregularityKind::LateArrival)
    );
    assert!(
        !report
            .iter()
            .any(|r| r.kind == IrregularityKind::EarlyDeparture)
    );
}

#[test]
fn test_incomplete_schedule_yields_no_report() {
    let mut schedule = office_schedule();
    schedule.lunch_end = None;

    // Wildly irregular logs, but the schedule cannot support a verdict.
    let logs = vec![
        ev("ayse", "2025-06-02", "11:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-03", "12:00", PunchKind::LunchStart),
    ];

    assert!(classify(&logs, &schedule).is_empty());
}

#[test]
fn test_input_order_does_not_change_the_report() {
    let sorted = vec![
        ev("ayse", "2025-06-02", "09:25", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:30", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "17:00", PunchKind::CheckOut),
    ];
    let mut shuffled = sorted.clone();
    shuffled.reverse();

    let a = classify(&sorted, &office_schedule());
    let b = classify(&shuffled, &office_schedule());

    let kinds = |r: &[mesai::models::irregularity::IrregularityRecord]| {
        let mut k: Vec<_> = r.iter().map(|x| x.kind.label()).collect();
        k.sort();
        k
    };
    assert_eq!(kinds(&a), kinds(&b));
    assert_eq!(a.len(), b.len());
}

#[test]
fn test_employee_name_resolution_order() {
    let schedule = office_schedule();
    let logs = vec![ev_named(
        "ayse",
        "Ayşe Yılmaz",
        "2025-06-02",
        "09:30",
        PunchKind::CheckIn,
    )];

    // Explicit override wins.
    let with_override =
        identify_irregularities_at(&logs, &schedule, Some("Ayşe Y."), None, d(TODAY), NOW_MINUTE);
    assert!(
        with_override
            .iter()
            .all(|r| r.employee_name == "Ayşe Y.")
    );

    // Otherwise the per-event display name.
    let from_event =
        identify_irregularities_at(&logs, &schedule, None, None, d(TODAY), NOW_MINUTE);
    assert!(from_event.iter().all(|r| r.employee_name == "Ayşe Yılmaz"));

    // Bare events fall back to the raw identifier.
    let bare = vec![ev("ayse", "2025-06-02", "09:30", PunchKind::CheckIn)];
    let from_id = identify_irregularities_at(&bare, &schedule, None, None, d(TODAY), NOW_MINUTE);
    assert!(from_id.iter().all(|r| r.employee_name == "ayse"));
}

#[test]
fn test_department_name_is_passed_through() {
    let logs = vec![ev("ayse", "2025-06-02", "09:30", PunchKind::CheckIn)];
    let report = identify_irregularities_at(
        &logs,
        &office_schedule(),
        None,
        Some("Yazılım"),
        d(TODAY),
        NOW_MINUTE,
    );

    assert!(!report.is_empty());
    assert!(
        report
            .iter()
            .all(|r| r.department_name.as_deref() == Some("Yazılım"))
    );
}

#[test]
fn test_seconds_are_truncated_in_comparisons() {
    // 09:00:45 is still minute 540, not late.
    let logs = vec![
        mesai::models::punch::PunchEvent::new(
            "ayse",
            d("2025-06-02"),
            t("09:00").with_second(45).unwrap(),
            PunchKind::CheckIn,
        ),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let report = classify(&logs, &office_schedule());
    assert!(
        !report
            .iter()
            .any(|r| r.kind == IrregularityKind::LateArrival)
    );
}
