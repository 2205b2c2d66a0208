//! Daily worked-minutes aggregation.
//!
//! Interprets a day's punches as a sequence of worked segments: a segment
//! opens at a check-in and closes at the next lunch-start or check-out.
//! Lunch time is never counted, and a lunch-end alone does not reopen a
//! segment: the employee must punch a new check-in after the break.
//! A segment still open at the end of the day (missing check-out) is
//! discarded here; the classifier reports it as an irregularity instead.

use crate::core::events_by_date;
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::utils::fmt_saat_dakika;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sentinel for a day that has punches but no closable work segment.
pub const UNCALCULATED: &str = "Hesaplanamadı";

/// Fold state for one day: the minute an open segment started at, and
/// whether the employee is currently on lunch break.
#[derive(Default)]
struct DayState {
    open_since: Option<i64>,
    on_break: bool,
}

/// Total creditable minutes for one day's events (any order; sorted
/// internally). Orphan punches are no-ops and segment durations are
/// clamped to zero, so corrupted sequences can reduce the total but
/// never make it negative.
pub fn day_total_minutes(day_events: &[&PunchEvent]) -> i64 {
    let mut sorted: Vec<&PunchEvent> = day_events.to_vec();
    sorted.sort_by_key(|ev| ev.minute_of_day());

    let mut total = 0i64;
    let mut state = DayState::default();

    for ev in sorted {
        let t = ev.minute_of_day();
        match ev.kind {
            PunchKind::CheckIn => {
                // A repeated check-in before any closing punch simply
                // resets the segment start.
                if !state.on_break {
                    state.open_since = Some(t);
                }
            }
            PunchKind::LunchStart => {
                if let Some(start) = state.open_since
                    && !state.on_break
                {
                    total += (t - start).max(0);
                }
                state.open_since = None;
                state.on_break = true;
            }
            PunchKind::LunchEnd => {
                // Does NOT reopen a segment: the clock resumes only at
                // the next check-in.
                state.on_break = false;
            }
            PunchKind::CheckOut => {
                if let Some(start) = state.open_since
                    && !state.on_break
                {
                    total += (t - start).max(0);
                    state.open_since = None;
                }
            }
        }
    }

    total
}

/// Map every date present in the snapshot to a formatted daily total
/// ("8 saat 0 dakika"), or to [`UNCALCULATED`] when the day has punches
/// but zero creditable minutes. Callers are expected to pre-filter to a
/// single employee; mixed input is tolerated but the days are summed as
/// one stream.
pub fn daily_work_hours_map(events: &[PunchEvent]) -> BTreeMap<NaiveDate, String> {
    let mut map = BTreeMap::new();

    for (date, day_events) in events_by_date(events) {
        let total = day_total_minutes(&day_events);
        let value = if total > 0 {
            fmt_saat_dakika(total)
        } else {
            UNCALCULATED.to_string()
        };
        map.insert(date, value);
    }

    map
}
