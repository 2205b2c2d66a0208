use chrono::NaiveTime;
use chrono::Timelike;
use serde::Serialize;

/// Expected daily schedule of a department.
///
/// All four times are optional in storage; the classifier only acts on a
/// schedule where every field is present (see [`WorkSchedule::resolved`]).
/// The invariant `work_start < lunch_start < lunch_end < work_end` is
/// assumed but never enforced: a malformed schedule simply yields
/// malformed durations, which downstream arithmetic clamps to zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkSchedule {
    pub department_id: String,
    pub work_start: Option<NaiveTime>,
    pub work_end: Option<NaiveTime>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub updated_at: String,
}

/// A schedule with all four times present, in minutes from midnight.
/// This is the only form the classifier computes with.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSchedule {
    pub work_start: i64,
    pub work_end: i64,
    pub lunch_start: i64,
    pub lunch_end: i64,
}

impl ResolvedSchedule {
    pub fn lunch_duration(&self) -> i64 {
        self.lunch_end - self.lunch_start
    }

    /// Expected net workday: gross span minus the expected lunch.
    pub fn workday_duration(&self) -> i64 {
        (self.work_end - self.work_start) - self.lunch_duration()
    }
}

fn to_minutes(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

impl WorkSchedule {
    pub fn is_complete(&self) -> bool {
        self.work_start.is_some()
            && self.work_end.is_some()
            && self.lunch_start.is_some()
            && self.lunch_end.is_some()
    }

    /// Returns the minute-resolution schedule, or None when any of the
    /// four times is missing.
    pub fn resolved(&self) -> Option<ResolvedSchedule> {
        Some(ResolvedSchedule {
            work_start: to_minutes(self.work_start?),
            work_end: to_minutes(self.work_end?),
            lunch_start: to_minutes(self.lunch_start?),
            lunch_end: to_minutes(self.lunch_end?),
        })
    }
}
