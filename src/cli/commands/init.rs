use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::open(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Database:    {:?}", db_path));

    Ok(())
}
