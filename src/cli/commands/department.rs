use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_department, insert_department, load_departments};
use crate::errors::AppResult;
use crate::models::roster::Department;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use chrono::Local;

/// Derive a short code from a name when --code is not given:
/// lowercase alphanumerics, spaces to dashes.
fn derive_code(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Department {
        add,
        code,
        del,
        list,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        if let Some(name) = add {
            let dept = Department {
                id: code.clone().unwrap_or_else(|| derive_code(name)),
                name: name.clone(),
                created_at: Local::now().to_rfc3339(),
            };
            insert_department(&pool.conn, &dept)?;
            audit(&pool.conn, "add", "department", &dept.id)?;
            success(format!("Added department '{}' (code {}).", dept.name, dept.id));
            return Ok(());
        }

        if let Some(dept_id) = del {
            delete_department(&pool.conn, dept_id)?;
            audit(&pool.conn, "del", "department", dept_id)?;
            success(format!("Deleted department {}.", dept_id));
            return Ok(());
        }

        if *list {
            let departments = load_departments(&pool.conn)?;
            if departments.is_empty() {
                warning("No departments defined.");
                return Ok(());
            }

            let mut table = Table::new(&["code", "name"], &cfg.separator_char);
            for d in departments {
                table.add_row(vec![d.id, d.name]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        warning("Nothing to do: specify --add, --del or --list.");
    }

    Ok(())
}
