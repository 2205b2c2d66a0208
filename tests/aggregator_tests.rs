mod common;

use common::{d, ev};
use mesai::core::aggregator::{UNCALCULATED, daily_work_hours_map};
use mesai::models::punch_kind::PunchKind;

#[test]
fn test_plain_day_without_lunch() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], "8 saat 0 dakika");
}

#[test]
fn test_lunch_is_excluded_from_total() {
    // (12:00-09:00) + (18:00-13:00) = 180 + 300 = 480
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "13:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], "8 saat 0 dakika");
}

#[test]
fn test_lunch_end_alone_does_not_resume_the_clock() {
    // No check-in after lunch: the afternoon is not credited.
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], "3 saat 0 dakika");
}

#[test]
fn test_missing_checkout_day_is_uncalculated() {
    let logs = vec![ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn)];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], UNCALCULATED);
}

#[test]
fn test_orphan_punches_are_ignored() {
    // Lunch-start with no open segment, check-out with no open segment.
    let logs = vec![
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], UNCALCULATED);
}

#[test]
fn test_second_check_in_resets_segment_start() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "10:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], "7 saat 0 dakika");
}

#[test]
fn test_input_order_does_not_matter() {
    let sorted = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "12:00", PunchKind::LunchStart),
        ev("ayse", "2025-06-02", "13:00", PunchKind::LunchEnd),
        ev("ayse", "2025-06-02", "13:05", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "18:00", PunchKind::CheckOut),
    ];
    let mut shuffled = sorted.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    assert_eq!(daily_work_hours_map(&sorted), daily_work_hours_map(&shuffled));
}

#[test]
fn test_short_day_formats_without_hours() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "09:45", PunchKind::CheckOut),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map[&d("2025-06-02")], "45 dakika");
}

#[test]
fn test_days_are_aggregated_independently() {
    let logs = vec![
        ev("ayse", "2025-06-02", "09:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-02", "17:00", PunchKind::CheckOut),
        ev("ayse", "2025-06-03", "10:00", PunchKind::CheckIn),
        ev("ayse", "2025-06-03", "12:00", PunchKind::CheckOut),
        ev("ayse", "2025-06-04", "09:00", PunchKind::CheckIn),
    ];

    let map = daily_work_hours_map(&logs);
    assert_eq!(map.len(), 3);
    assert_eq!(map[&d("2025-06-02")], "8 saat 0 dakika");
    assert_eq!(map[&d("2025-06-03")], "2 saat 0 dakika");
    assert_eq!(map[&d("2025-06-04")], UNCALCULATED);
}
