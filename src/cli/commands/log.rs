use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open(&cfg.database)?;

        let mut table = Table::new(&["date", "operation", "target", "message"], &cfg.separator_char);
        for (date, operation, target, message) in load_audit(&pool.conn)? {
            table.add_row(vec![date, operation, target, message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
