use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::roster::{Department, Employee};
use crate::models::schedule::WorkSchedule;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::collections::HashMap;

// ---------------------------------------------------------------------
// Punch events
// ---------------------------------------------------------------------

fn map_event_row(row: &Row) -> rusqlite::Result<PunchEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;
    let kind_str: String = row.get("kind")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time: NaiveTime = parse_time(&time_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPunchKind(kind_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        time,
        kind,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
        employee_name: row.get("employee_name")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &PunchEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (employee_id, date, time, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.employee_id,
            ev.date_str(),
            ev.time.format("%H:%M").to_string(),
            ev.kind.to_db_str(),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// Full punch-log snapshot, with display names resolved from the roster.
/// All narrowing (employee, date range, kind) happens afterwards in
/// `core::filter`, so this is the only event read path.
pub fn load_events(conn: &Connection) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.employee_id, e.date, e.time, e.kind, e.source, e.created_at,
                emp.name AS employee_name
         FROM events e
         LEFT JOIN employees emp ON emp.id = e.employee_id
         ORDER BY e.date ASC, e.time ASC",
    )?;

    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------

pub fn insert_department(conn: &Connection, dept: &Department) -> AppResult<()> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO departments (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![dept.id, dept.name, dept.created_at],
    )?;
    if inserted == 0 {
        return Err(AppError::DuplicateCode(dept.id.clone()));
    }
    Ok(())
}

pub fn load_departments(conn: &Connection) -> AppResult<Vec<Department>> {
    let mut stmt =
        conn.prepare("SELECT id, name, created_at FROM departments ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn department_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM departments WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

pub fn delete_department(conn: &Connection, id: &str) -> AppResult<()> {
    if !department_exists(conn, id)? {
        return Err(AppError::UnknownDepartment(id.to_string()));
    }
    // Employees keep existing without a department; the report simply
    // skips them from then on.
    conn.execute(
        "UPDATE employees SET department_id = NULL WHERE department_id = ?1",
        [id],
    )?;
    conn.execute("DELETE FROM schedules WHERE department_id = ?1", [id])?;
    conn.execute("DELETE FROM departments WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO employees (id, name, department_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![emp.id, emp.name, emp.department_id, emp.created_at],
    )?;
    if inserted == 0 {
        return Err(AppError::DuplicateCode(emp.id.clone()));
    }
    Ok(())
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn
        .prepare("SELECT id, name, department_id, created_at FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            department_id: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_employee(conn: &Connection, id: &str) -> AppResult<Employee> {
    let mut stmt =
        conn.prepare("SELECT id, name, department_id, created_at FROM employees WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], |row| {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            department_id: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    match rows.next() {
        Some(emp) => Ok(emp?),
        None => Err(AppError::UnknownEmployee(id.to_string())),
    }
}

pub fn delete_employee(conn: &Connection, id: &str) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::UnknownEmployee(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------

fn time_to_db(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

fn time_from_db(s: String) -> Option<NaiveTime> {
    if s.is_empty() { None } else { parse_time(&s) }
}

pub fn upsert_schedule(conn: &Connection, sched: &WorkSchedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedules (department_id, work_start, work_end, lunch_start, lunch_end, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(department_id) DO UPDATE SET
            work_start = excluded.work_start,
            work_end = excluded.work_end,
            lunch_start = excluded.lunch_start,
            lunch_end = excluded.lunch_end,
            updated_at = excluded.updated_at",
        params![
            sched.department_id,
            time_to_db(sched.work_start),
            time_to_db(sched.work_end),
            time_to_db(sched.lunch_start),
            time_to_db(sched.lunch_end),
            sched.updated_at,
        ],
    )?;
    Ok(())
}

fn map_schedule_row(row: &Row) -> rusqlite::Result<WorkSchedule> {
    Ok(WorkSchedule {
        department_id: row.get(0)?,
        work_start: time_from_db(row.get(1)?),
        work_end: time_from_db(row.get(2)?),
        lunch_start: time_from_db(row.get(3)?),
        lunch_end: time_from_db(row.get(4)?),
        updated_at: row.get(5)?,
    })
}

pub fn get_schedule(conn: &Connection, department_id: &str) -> AppResult<Option<WorkSchedule>> {
    let mut stmt = conn.prepare(
        "SELECT department_id, work_start, work_end, lunch_start, lunch_end, updated_at
         FROM schedules WHERE department_id = ?1",
    )?;

    let mut rows = stmt.query_map([department_id], map_schedule_row)?;
    match rows.next() {
        Some(s) => Ok(Some(s?)),
        None => Ok(None),
    }
}

/// All schedules keyed by department id, the shape the report projector
/// consumes.
pub fn load_schedules(conn: &Connection) -> AppResult<HashMap<String, WorkSchedule>> {
    let mut stmt = conn.prepare(
        "SELECT department_id, work_start, work_end, lunch_start, lunch_end, updated_at
         FROM schedules",
    )?;

    let rows = stmt.query_map([], map_schedule_row)?;

    let mut out = HashMap::new();
    for r in rows {
        let sched = r?;
        out.insert(sched.department_id.clone(), sched);
    }
    Ok(out)
}
