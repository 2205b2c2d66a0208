//! Roster-wide irregularity report.
//!
//! Thin orchestration over the classifier: one invocation per employee
//! that has both a department and a complete schedule. Employees missing
//! either are a configuration gap, not an error, and are skipped.

use crate::core::classifier::identify_irregularities_at;
use crate::core::filter::filter_events;
use crate::models::irregularity::{IrregularityKind, IrregularityRecord};
use crate::models::punch::PunchEvent;
use crate::models::roster::{Department, Employee};
use crate::models::schedule::WorkSchedule;
use crate::utils::time::minute_of_day;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Build the combined report against the local wall clock.
pub fn build_roster_report(
    employees: &[Employee],
    departments: &[Department],
    schedules: &HashMap<String, WorkSchedule>,
    logs: &[PunchEvent],
) -> Vec<IrregularityRecord> {
    let now = Local::now();
    build_roster_report_at(
        employees,
        departments,
        schedules,
        logs,
        now.date_naive(),
        minute_of_day(now.time()),
    )
}

/// Build the combined report with an explicit "now" (used by tests and
/// by any caller replaying historical snapshots).
pub fn build_roster_report_at(
    employees: &[Employee],
    departments: &[Department],
    schedules: &HashMap<String, WorkSchedule>,
    logs: &[PunchEvent],
    today: NaiveDate,
    now_minute: i64,
) -> Vec<IrregularityRecord> {
    let mut report = Vec::new();

    for employee in employees {
        let Some(department_id) = &employee.department_id else {
            continue;
        };
        let Some(schedule) = schedules.get(department_id) else {
            continue;
        };
        if !schedule.is_complete() {
            continue;
        }

        let employee_logs = filter_events(logs, Some(&employee.id), None, None, None);
        if employee_logs.is_empty() {
            continue;
        }

        let department_name = departments
            .iter()
            .find(|d| &d.id == department_id)
            .map(|d| d.name.as_str());

        report.extend(identify_irregularities_at(
            &employee_logs,
            schedule,
            Some(&employee.name),
            department_name,
            today,
            now_minute,
        ));
    }

    report
}

/// Post-hoc narrowing of a combined report. The department filter walks
/// through the roster (records do not carry a department id, only a
/// display name); an empty kind set means "all kinds".
pub fn filter_report(
    records: &[IrregularityRecord],
    employees: &[Employee],
    department_id: Option<&str>,
    kinds: &[IrregularityKind],
) -> Vec<IrregularityRecord> {
    records
        .iter()
        .filter(|rec| match department_id {
            None => true,
            Some(dept) => employees
                .iter()
                .find(|e| e.id == rec.employee_id)
                .is_some_and(|e| e.department_id.as_deref() == Some(dept)),
        })
        .filter(|rec| kinds.is_empty() || kinds.contains(&rec.kind))
        .cloned()
        .collect()
}
