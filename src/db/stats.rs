use crate::db::migrate::{current_version, pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Key/value pairs for `db --info`.
pub fn db_info(conn: &Connection, path: &str) -> AppResult<Vec<(String, String)>> {
    let mut out = Vec::new();

    out.push(("database".to_string(), path.to_string()));
    out.push((
        "schema version".to_string(),
        current_version(conn)?.to_string(),
    ));
    out.push((
        "pending migrations".to_string(),
        pending_migrations(conn)?.to_string(),
    ));

    for table in ["departments", "employees", "schedules", "events", "log"] {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        out.push((format!("{} rows", table), count.to_string()));
    }

    if let Ok(meta) = std::fs::metadata(path) {
        out.push(("file size (bytes)".to_string(), meta.len().to_string()));
    }

    Ok(out)
}

/// PRAGMA integrity_check; returns the first reported line ("ok" when
/// the database is healthy).
pub fn integrity_check(conn: &Connection) -> AppResult<String> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}

pub fn vacuum(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("VACUUM")?;
    Ok(())
}
