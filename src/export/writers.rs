use crate::errors::{AppError, AppResult};
use csv::Writer;
use serde::Serialize;
use std::path::Path;

/// Write rows as CSV; headers come from the struct's field names.
pub fn write_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let mut wtr =
        Writer::from_path(path).map_err(|e| AppError::Export(format!("csv open: {}", e)))?;
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("csv write: {}", e)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows as pretty-printed JSON.
pub fn write_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("json write: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
