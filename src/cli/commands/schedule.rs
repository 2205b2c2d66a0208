use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{department_exists, get_schedule, upsert_schedule};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::WorkSchedule;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_optional_time;
use chrono::{Local, NaiveTime};

fn fmt(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "(unset)".to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        dept,
        work_start,
        work_end,
        lunch_start,
        lunch_end,
        show,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        if !department_exists(&pool.conn, dept)? {
            return Err(AppError::UnknownDepartment(dept.clone()));
        }

        if *show {
            match get_schedule(&pool.conn, dept)? {
                Some(sched) => {
                    println!("work start:  {}", fmt(sched.work_start));
                    println!("work end:    {}", fmt(sched.work_end));
                    println!("lunch start: {}", fmt(sched.lunch_start));
                    println!("lunch end:   {}", fmt(sched.lunch_end));
                    if !sched.is_complete() {
                        warning("Schedule is incomplete; the department is skipped in reports.");
                    }
                }
                None => warning(format!("No schedule configured for {}.", dept)),
            }
            return Ok(());
        }

        if work_start.is_none()
            && work_end.is_none()
            && lunch_start.is_none()
            && lunch_end.is_none()
        {
            warning("Nothing to do: specify --show or at least one time to set.");
            return Ok(());
        }

        // Start from the stored schedule, falling back to the config
        // defaults for fields never set, then apply the flags.
        let current = get_schedule(&pool.conn, dept)?.unwrap_or_else(|| WorkSchedule {
            department_id: dept.clone(),
            work_start: crate::utils::time::parse_time(&cfg.default_work_start),
            work_end: crate::utils::time::parse_time(&cfg.default_work_end),
            lunch_start: crate::utils::time::parse_time(&cfg.default_lunch_start),
            lunch_end: crate::utils::time::parse_time(&cfg.default_lunch_end),
            updated_at: String::new(),
        });

        let sched = WorkSchedule {
            department_id: dept.clone(),
            work_start: parse_optional_time(work_start.as_ref())?.or(current.work_start),
            work_end: parse_optional_time(work_end.as_ref())?.or(current.work_end),
            lunch_start: parse_optional_time(lunch_start.as_ref())?.or(current.lunch_start),
            lunch_end: parse_optional_time(lunch_end.as_ref())?.or(current.lunch_end),
            updated_at: Local::now().to_rfc3339(),
        };

        upsert_schedule(&pool.conn, &sched)?;
        audit(&pool.conn, "set", "schedule", dept)?;
        success(format!(
            "Schedule for {}: {} - {} (lunch {} - {}).",
            dept,
            fmt(sched.work_start),
            fmt(sched.work_end),
            fmt(sched.lunch_start),
            fmt(sched.lunch_end)
        ));
    }

    Ok(())
}
