//! Versioned schema migrations.
//!
//! The schema is owned entirely by this module: `init_db` runs pending
//! migrations and nothing else ever issues CREATE TABLE. The applied
//! version is tracked in `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use rusqlite::Connection;

struct Migration {
    version: i32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial schema",
    sql: "
        CREATE TABLE IF NOT EXISTS departments (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS employees (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            department_id TEXT REFERENCES departments(id),
            created_at    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS schedules (
            department_id TEXT PRIMARY KEY REFERENCES departments(id),
            work_start    TEXT NOT NULL DEFAULT '',
            work_end      TEXT NOT NULL DEFAULT '',
            lunch_start   TEXT NOT NULL DEFAULT '',
            lunch_end     TEXT NOT NULL DEFAULT '',
            updated_at    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL,
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            kind        TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_date
            ON events (employee_id, date);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL,
            message   TEXT NOT NULL
        );
    ",
}];

pub fn current_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

pub fn pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = current_version(conn)?;
    Ok(MIGRATIONS.iter().filter(|m| m.version > current).count())
}

/// Apply every migration newer than the database's recorded version,
/// each inside its own transaction.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = current_version(conn)?;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql).map_err(|e| {
            AppError::Migration(format!(
                "migration {} ({}) failed: {}",
                migration.version, migration.name, e
            ))
        })?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
        info(format!(
            "Applied migration {} ({}).",
            migration.version, migration.name
        ));
    }

    Ok(())
}
