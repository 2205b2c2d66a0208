use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database: bring the schema up to date and leave an
/// audit trail entry. All schema DDL lives in the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    audit(conn, "init", "db", "database initialized")?;
    Ok(())
}
