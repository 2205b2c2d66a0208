use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{get_employee, insert_event};
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;
use crate::utils::time::parse_optional_time;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        employee,
        kind,
        date,
        time,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        // The punch must belong to a known employee; everything else
        // about the sequence (duplicates, order) is left to the engine.
        let emp = get_employee(&pool.conn, employee)?;

        let punch_kind = PunchKind::from_cli_str(kind)
            .ok_or_else(|| AppError::InvalidPunchKind(kind.clone()))?;

        let now = Local::now();
        let date = parse_optional_date(date.as_ref())?.unwrap_or_else(|| now.date_naive());
        let time = parse_optional_time(time.as_ref())?.unwrap_or_else(|| now.time());

        let ev = PunchEvent::new(&emp.id, date, time, punch_kind);
        insert_event(&pool.conn, &ev)?;
        audit(
            &pool.conn,
            "punch",
            &emp.id,
            &format!("{} {} {}", ev.date_str(), ev.time_str(), punch_kind.to_db_str()),
        )?;

        success(format!(
            "{}: {} ({} {}).",
            emp.name,
            punch_kind.status_text(),
            ev.date_str(),
            ev.time_str()
        ));
    }

    Ok(())
}
