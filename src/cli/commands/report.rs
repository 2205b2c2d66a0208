use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_events;
use crate::core::report::{build_roster_report, filter_report};
use crate::db::pool::DbPool;
use crate::db::queries::{load_departments, load_employees, load_events, load_schedules};
use crate::errors::{AppError, AppResult};
use crate::models::irregularity::IrregularityKind;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        dept,
        kinds,
        from,
        to,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        let employees = load_employees(&pool.conn)?;
        let departments = load_departments(&pool.conn)?;
        let schedules = load_schedules(&pool.conn)?;

        let start = parse_optional_date(from.as_ref())?;
        let end = parse_optional_date(to.as_ref())?;

        let kind_filters = kinds
            .iter()
            .map(|s| {
                IrregularityKind::from_cli_str(s)
                    .ok_or_else(|| AppError::InvalidIrregularityKind(s.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        // Narrow the snapshot first, then classify; the projector skips
        // employees without a department or complete schedule.
        let snapshot = load_events(&pool.conn)?;
        let logs = filter_events(&snapshot, employee.as_deref(), start, end, None);

        let report = build_roster_report(&employees, &departments, &schedules, &logs);
        let report = filter_report(&report, &employees, dept.as_deref(), &kind_filters);

        if report.is_empty() {
            success("No irregularities found.");
            return Ok(());
        }

        let mut table = Table::new(
            &["date", "employee", "department", "kind", "details"],
            &cfg.separator_char,
        );
        for rec in &report {
            table.add_row(vec![
                rec.date.format("%Y-%m-%d").to_string(),
                rec.employee_name.clone(),
                rec.department_name.clone().unwrap_or_default(),
                rec.kind.label().to_string(),
                rec.details.clone(),
            ]);
        }
        print!("{}", table.render());

        println!("{} irregularities.", report.len());
    }

    Ok(())
}
