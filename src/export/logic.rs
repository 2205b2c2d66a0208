use crate::core::filter::filter_events;
use crate::core::report::build_roster_report;
use crate::db::pool::DbPool;
use crate::db::queries::{load_departments, load_employees, load_events, load_schedules};
use crate::errors::{AppError, AppResult};
use crate::export::model::{PunchExport, ReportExport};
use crate::export::writers::{write_csv, write_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the punch log, optionally narrowed by employee and date
    /// range. Refuses a relative path and an existing file without
    /// `force`.
    pub fn export_punches(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        employee_id: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        force: bool,
    ) -> AppResult<()> {
        let path = ensure_writable(file, force)?;

        let snapshot = load_events(&pool.conn)?;
        let narrowed = filter_events(&snapshot, employee_id, start, end, None);

        if narrowed.is_empty() {
            warning("No events found for selected range.");
            return Ok(());
        }

        let rows: Vec<PunchExport> = narrowed.iter().map(PunchExport::from).collect();
        match format {
            ExportFormat::Csv => write_csv(&rows, &path)?,
            ExportFormat::Json => write_json(&rows, &path)?,
        }

        notify_export_success("Punch log", &path);
        Ok(())
    }

    /// Export the roster-wide irregularity report.
    pub fn export_report(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = ensure_writable(file, force)?;

        let employees = load_employees(&pool.conn)?;
        let departments = load_departments(&pool.conn)?;
        let schedules = load_schedules(&pool.conn)?;
        let logs = load_events(&pool.conn)?;

        let report = build_roster_report(&employees, &departments, &schedules, &logs);

        if report.is_empty() {
            warning("No irregularities found; nothing exported.");
            return Ok(());
        }

        let rows: Vec<ReportExport> = report.iter().map(ReportExport::from).collect();
        match format {
            ExportFormat::Csv => write_csv(&rows, &path)?,
            ExportFormat::Json => write_json(&rows, &path)?,
        }

        notify_export_success("Report", &path);
        Ok(())
    }
}

fn ensure_writable(file: &str, force: bool) -> AppResult<std::path::PathBuf> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::from(io::Error::other(format!(
            "Output file path must be absolute: {file}"
        ))));
    }

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists (use --force to overwrite): {}",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}
