use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::daily_work_hours_map;
use crate::core::filter::filter_events;
use crate::db::pool::DbPool;
use crate::db::queries::{get_employee, load_events};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::parse_optional_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { employee, from, to } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let emp = get_employee(&pool.conn, employee)?;
        let start = parse_optional_date(from.as_ref())?;
        let end = parse_optional_date(to.as_ref())?;

        let snapshot = load_events(&pool.conn)?;
        let events = filter_events(&snapshot, Some(&emp.id), start, end, None);

        if events.is_empty() {
            warning(format!("No punches recorded for {}.", emp.id));
            return Ok(());
        }

        println!("Daily worked hours for {} ({}):", emp.name, emp.id);

        let mut table = Table::new(&["date", "worked"], &cfg.separator_char);
        for (date, worked) in daily_work_hours_map(&events) {
            table.add_row(vec![date.format("%Y-%m-%d").to_string(), worked]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
