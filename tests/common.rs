#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use mesai::models::punch::PunchEvent;
use mesai::models::punch_kind::PunchKind;
use mesai::models::schedule::WorkSchedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn msi() -> Command {
    cargo_bin_cmd!("mesai")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mesai.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB with one department (yaz, 09:00-18:00, lunch 12:00-13:00)
/// and one employee (ayse), useful for many CLI tests
pub fn init_db_with_roster(db_path: &str) {
    msi()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    msi()
        .args([
            "--db", db_path, "department", "--add", "Yazılım", "--code", "yaz",
        ])
        .assert()
        .success();

    msi()
        .args([
            "--db",
            db_path,
            "schedule",
            "yaz",
            "--work-start",
            "09:00",
            "--work-end",
            "18:00",
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "13:00",
        ])
        .assert()
        .success();

    msi()
        .args([
            "--db",
            db_path,
            "employee",
            "--add",
            "Ayşe Yılmaz",
            "--code",
            "ayse",
            "--dept",
            "yaz",
        ])
        .assert()
        .success();
}

/// Record a punch via the CLI on an explicit date/time.
pub fn punch(db_path: &str, employee: &str, kind: &str, date: &str, time: &str) {
    msi()
        .args([
            "--db", db_path, "punch", employee, kind, "--date", date, "--time", time,
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------------
// In-memory fixtures for the pure engine tests
// ---------------------------------------------------------------------

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("test time")
}

pub fn ev(employee_id: &str, date: &str, time: &str, kind: PunchKind) -> PunchEvent {
    PunchEvent::new(employee_id, d(date), t(time), kind)
}

pub fn ev_named(
    employee_id: &str,
    name: &str,
    date: &str,
    time: &str,
    kind: PunchKind,
) -> PunchEvent {
    let mut e = ev(employee_id, date, time, kind);
    e.employee_name = Some(name.to_string());
    e
}

/// The standard office schedule used across the engine tests:
/// work 09:00-18:00, lunch 12:00-13:00.
pub fn office_schedule() -> WorkSchedule {
    WorkSchedule {
        department_id: "yaz".to_string(),
        work_start: Some(t("09:00")),
        work_end: Some(t("18:00")),
        lunch_start: Some(t("12:00")),
        lunch_end: Some(t("13:00")),
        updated_at: String::new(),
    }
}
