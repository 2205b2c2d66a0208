use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        report,
        employee,
        from,
        to,
        force,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        if *report {
            ExportLogic::export_report(&mut pool, format.clone(), file, *force)?;
        } else {
            let start = parse_optional_date(from.as_ref())?;
            let end = parse_optional_date(to.as_ref())?;
            ExportLogic::export_punches(
                &mut pool,
                format.clone(),
                file,
                employee.as_deref(),
                start,
                end,
                *force,
            )?;
        }
    }

    Ok(())
}
