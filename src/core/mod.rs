//! Log-interpretation engine.
//!
//! Everything in this module is a pure, synchronous transformation over
//! in-memory snapshots: no storage access, no clock reads except where a
//! "now" value is injected explicitly, no error type. Malformed input
//! degrades to omission or a sentinel value, never a failure.

pub mod aggregator;
pub mod classifier;
pub mod filter;
pub mod report;

use crate::models::punch::PunchEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group events by calendar date, each day sorted ascending by
/// time-of-day. Input order is irrelevant: both the aggregator and the
/// classifier rely on this sort rather than on caller-supplied ordering.
/// The sort is stable, so same-minute punches keep their input order.
pub(crate) fn events_by_date(events: &[PunchEvent]) -> BTreeMap<NaiveDate, Vec<&PunchEvent>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&PunchEvent>> = BTreeMap::new();
    for ev in events {
        by_date.entry(ev.date).or_default().push(ev);
    }
    for day in by_date.values_mut() {
        day.sort_by_key(|ev| ev.minute_of_day());
    }
    by_date
}
