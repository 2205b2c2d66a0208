use super::punch_kind::PunchKind;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A single attendance punch, as stored in the `events` table.
///
/// `(employee_id, date, time, kind)` is NOT unique: duplicate and
/// out-of-order punches are tolerated everywhere downstream. The core
/// engine sorts by time before interpreting a day.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    pub employee_id: String,  // ⇔ events.employee_id (TEXT)
    pub date: NaiveDate,      // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,      // ⇔ events.time (TEXT "HH:MM[:SS]")
    pub kind: PunchKind,      // ⇔ events.kind ('check-in' | ...)
    pub source: String,       // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String,   // ⇔ events.created_at (TEXT, ISO8601)

    /// Display name carried along for reports; never persisted on the
    /// event row itself (resolved from the roster at load time).
    #[serde(skip)]
    pub employee_name: Option<String>,
}

impl PunchEvent {
    /// High-level constructor for punches recorded from the CLI.
    pub fn new(employee_id: &str, date: NaiveDate, time: NaiveTime, kind: PunchKind) -> Self {
        Self {
            id: 0,
            employee_id: employee_id.to_string(),
            date,
            time,
            kind,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
            employee_name: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Minutes from midnight, seconds truncated. All core arithmetic
    /// works on this value so HH:MM and HH:MM:SS inputs behave alike.
    pub fn minute_of_day(&self) -> i64 {
        use chrono::Timelike;
        self.time.hour() as i64 * 60 + self.time.minute() as i64
    }
}
