use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{db_info, integrity_check, vacuum};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum: do_vacuum,
        info,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let result = integrity_check(&pool.conn)?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {}", result));
            }
        }

        if *do_vacuum {
            vacuum(&pool.conn)?;
            success("Database vacuumed.");
        }

        if *info {
            for (key, value) in db_info(&pool.conn, &cfg.database)? {
                println!("{:<20} {}", key, value);
            }
        }

        if !(*migrate || *check || *do_vacuum || *info) {
            warning("Nothing to do: specify --migrate, --check, --vacuum or --info.");
        }
    }

    Ok(())
}
