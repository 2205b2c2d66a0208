//! Predicate-based narrowing of a punch-log snapshot.

use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::NaiveDate;

/// Return the events matching every supplied constraint. Date bounds are
/// inclusive on both ends; a `None` constraint matches everything on that
/// dimension. Never fails: no match means an empty vector.
pub fn filter_events(
    events: &[PunchEvent],
    employee_id: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    kind: Option<PunchKind>,
) -> Vec<PunchEvent> {
    events
        .iter()
        .filter(|ev| employee_id.is_none_or(|id| ev.employee_id == id))
        .filter(|ev| start.is_none_or(|s| ev.date >= s))
        .filter(|ev| end.is_none_or(|e| ev.date <= e))
        .filter(|ev| kind.is_none_or(|k| ev.kind == k))
        .cloned()
        .collect()
}

/// The employee's most recent punch across the whole snapshot, by
/// date+time. Used for the status line ("İşe giriş yaptınız", ...).
pub fn latest_event<'a>(events: &'a [PunchEvent], employee_id: &str) -> Option<&'a PunchEvent> {
    events
        .iter()
        .filter(|ev| ev.employee_id == employee_id)
        .max_by_key(|ev| (ev.date, ev.minute_of_day()))
}
