//! Schedule-deviation detection.
//!
//! Compares one employee's punches against the department schedule and
//! emits one [`IrregularityRecord`] per detected deviation. Several
//! deviations may co-occur on the same date. The caller invokes this once
//! per employee; `core::report` does exactly that for the whole roster.

use crate::core::events_by_date;
use crate::models::irregularity::{IrregularityKind, IrregularityRecord};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::schedule::WorkSchedule;
use crate::utils::fmt_saat_dakika;
use crate::utils::time::minute_of_day;
use chrono::{Local, NaiveDate};

fn fmt_minute(m: i64) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

fn of_kind<'a>(day: &[&'a PunchEvent], k: PunchKind) -> Vec<&'a PunchEvent> {
    day.iter().filter(|ev| ev.kind == k).copied().collect()
}

/// Classify against the local wall clock (the normal production path).
pub fn identify_irregularities(
    events: &[PunchEvent],
    schedule: &WorkSchedule,
    employee_name: Option<&str>,
    department_name: Option<&str>,
) -> Vec<IrregularityRecord> {
    let now = Local::now();
    identify_irregularities_at(
        events,
        schedule,
        employee_name,
        department_name,
        now.date_naive(),
        minute_of_day(now.time()),
    )
}

/// Classify with an explicit "now". The current date/time only matters
/// for the missing-checkout rule: today's still-open day is flagged only
/// once the schedule's work end has passed.
///
/// Returns an empty list when any of the four schedule times is missing:
/// no report is better than a wrong one for a half-configured department.
pub fn identify_irregularities_at(
    events: &[PunchEvent],
    schedule: &WorkSchedule,
    employee_name: Option<&str>,
    department_name: Option<&str>,
    today: NaiveDate,
    now_minute: i64,
) -> Vec<IrregularityRecord> {
    let mut irregularities = Vec::new();

    let Some(sched) = schedule.resolved() else {
        return irregularities;
    };
    let expected_lunch = sched.lunch_duration();
    let expected_workday = sched.workday_duration();

    for (date, daily) in events_by_date(events) {
        let resolved_name = employee_name
            .map(str::to_string)
            .or_else(|| daily.first().and_then(|ev| ev.employee_name.clone()))
            .or_else(|| daily.first().map(|ev| ev.employee_id.clone()))
            .unwrap_or_else(|| "Bilinmeyen".to_string());
        let department = department_name.map(str::to_string);

        let record = |kind: IrregularityKind, employee_id: &str, details: String| {
            IrregularityRecord {
                employee_id: employee_id.to_string(),
                employee_name: resolved_name.clone(),
                department_name: department.clone(),
                date,
                kind,
                details,
                expected: None,
                actual: None,
                expected_duration: None,
                duration: None,
            }
        };

        let check_ins = of_kind(&daily, PunchKind::CheckIn);
        let check_outs = of_kind(&daily, PunchKind::CheckOut);
        let lunch_starts = of_kind(&daily, PunchKind::LunchStart);
        let lunch_ends = of_kind(&daily, PunchKind::LunchEnd);

        // Redundant punches of the same kind collapse into canonical
        // day markers; they are not flagged.
        let first_check_in = check_ins.first().copied();
        let last_check_out = check_outs.last().copied();
        let first_lunch_start = lunch_starts.first().copied();
        let last_lunch_end = lunch_ends.last().copied();

        // Missing check-out. Past dates always count; today only counts
        // once the expected work end has passed (the employee may still
        // be at their desk).
        if let Some(ci) = first_check_in
            && check_outs.is_empty()
        {
            let missing = date < today || (date == today && now_minute > sched.work_end);
            if missing {
                let mut rec = record(
                    IrregularityKind::MissingCheckRecord,
                    &ci.employee_id,
                    format!(
                        "Giriş yapıldı ({}) ancak gün sonu çıkış kaydı bulunamadı.",
                        ci.time_str()
                    ),
                );
                rec.actual = Some(ci.time_str());
                rec.expected = Some("Çıkış Bekleniyor".to_string());
                irregularities.push(rec);
            }
        }

        // Late arrival.
        if let Some(ci) = first_check_in
            && ci.minute_of_day() > sched.work_start
        {
            let mut rec = record(
                IrregularityKind::LateArrival,
                &ci.employee_id,
                format!(
                    "Beklenen {} yerine {} giriş yapıldı.",
                    fmt_minute(sched.work_start),
                    ci.time_str()
                ),
            );
            rec.expected = Some(fmt_minute(sched.work_start));
            rec.actual = Some(ci.time_str());
            irregularities.push(rec);
        }

        // Early departure.
        if let Some(co) = last_check_out
            && co.minute_of_day() < sched.work_end
        {
            let mut rec = record(
                IrregularityKind::EarlyDeparture,
                &co.employee_id,
                format!(
                    "Beklenen {} yerine {} çıkış yapıldı.",
                    fmt_minute(sched.work_end),
                    co.time_str()
                ),
            );
            rec.expected = Some(fmt_minute(sched.work_end));
            rec.actual = Some(co.time_str());
            irregularities.push(rec);
        }

        // Lunch evaluation: the three branches are mutually exclusive.
        match (first_lunch_start, last_lunch_end) {
            (Some(ls), Some(le)) => {
                // Clamped to zero: a lunch-end recorded before its start
                // is corrupted data, not a negative break.
                let actual_lunch = (le.minute_of_day() - ls.minute_of_day()).max(0);
                if actual_lunch > expected_lunch {
                    let mut rec = record(
                        IrregularityKind::LongLunch,
                        &ls.employee_id,
                        format!(
                            "Beklenen {} yerine {} mola kullanıldı.",
                            fmt_saat_dakika(expected_lunch),
                            fmt_saat_dakika(actual_lunch)
                        ),
                    );
                    rec.expected_duration = Some(fmt_saat_dakika(expected_lunch));
                    rec.duration = Some(fmt_saat_dakika(actual_lunch));
                    irregularities.push(rec);
                }
            }
            (Some(ls), None) => {
                let mut rec = record(
                    IrregularityKind::MissingLunchRecord,
                    &ls.employee_id,
                    format!(
                        "Öğle arası başladı ({}) ancak bitiş kaydı yok.",
                        ls.time_str()
                    ),
                );
                rec.actual = Some(ls.time_str());
                rec.expected = Some("Mola Bitişi Bekleniyor".to_string());
                irregularities.push(rec);
            }
            (None, Some(le)) => {
                let mut rec = record(
                    IrregularityKind::MissingLunchRecord,
                    &le.employee_id,
                    format!(
                        "Öğle arası bitiş kaydı ({}) var ancak başlangıç kaydı yok.",
                        le.time_str()
                    ),
                );
                rec.actual = Some(le.time_str());
                rec.expected = Some("Mola Başlangıcı Bekleniyor".to_string());
                irregularities.push(rec);
            }
            (None, None) => {}
        }

        // Short workday. Suppressed when the day already carries a
        // missing check-in/out record, to avoid double-reporting an
        // incomplete day. Strictly less-than: working exactly the
        // expected minutes is not short.
        if let (Some(ci), Some(co)) = (first_check_in, last_check_out) {
            let mut actual_work = co.minute_of_day() - ci.minute_of_day();
            if let (Some(ls), Some(le)) = (first_lunch_start, last_lunch_end) {
                actual_work -= (le.minute_of_day() - ls.minute_of_day()).max(0);
            }
            let actual_work = actual_work.max(0);

            let already_incomplete = irregularities.iter().any(|ir| {
                ir.date == date
                    && ir.employee_id == ci.employee_id
                    && ir.kind == IrregularityKind::MissingCheckRecord
            });

            if !already_incomplete && actual_work < expected_workday {
                let mut rec = record(
                    IrregularityKind::ShortWorkDay,
                    &ci.employee_id,
                    format!(
                        "Beklenen {} yerine {} çalışıldı.",
                        fmt_saat_dakika(expected_workday),
                        fmt_saat_dakika(actual_work)
                    ),
                );
                rec.expected_duration = Some(fmt_saat_dakika(expected_workday));
                rec.duration = Some(fmt_saat_dakika(actual_work));
                irregularities.push(rec);
            }
        }
    }

    irregularities
}
