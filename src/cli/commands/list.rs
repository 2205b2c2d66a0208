use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{filter_events, latest_event};
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        employee,
        from,
        to,
        kind,
        last,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let snapshot = load_events(&pool.conn)?;

        if *last {
            let emp_id = employee
                .as_deref()
                .ok_or_else(|| AppError::Other("--last requires --employee".to_string()))?;

            match latest_event(&snapshot, emp_id) {
                Some(ev) => info(format!(
                    "{} {} — {}",
                    ev.date_str(),
                    ev.time_str(),
                    ev.kind.latest_status_text()
                )),
                None => warning(format!("No punches recorded for {}.", emp_id)),
            }
            return Ok(());
        }

        let start = parse_optional_date(from.as_ref())?;
        let end = parse_optional_date(to.as_ref())?;
        let kind = match kind {
            Some(s) => {
                Some(PunchKind::from_cli_str(s).ok_or_else(|| AppError::InvalidPunchKind(s.clone()))?)
            }
            None => None,
        };

        let events = filter_events(&snapshot, employee.as_deref(), start, end, kind);
        if events.is_empty() {
            warning("No events match the given filters.");
            return Ok(());
        }

        let mut table = Table::new(
            &["id", "employee", "date", "time", "kind", "status"],
            &cfg.separator_char,
        );
        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.employee_name.clone().unwrap_or_else(|| ev.employee_id.clone()),
                ev.date_str(),
                ev.time_str(),
                ev.kind.to_db_str().to_string(),
                ev.kind.status_text().to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
