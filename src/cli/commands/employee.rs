use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_employee, department_exists, insert_employee, load_employees,
};
use crate::errors::{AppError, AppResult};
use crate::models::roster::Employee;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use chrono::Local;

fn derive_code(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee {
        add,
        code,
        dept,
        del,
        list,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        if let Some(name) = add {
            if let Some(dept_id) = dept
                && !department_exists(&pool.conn, dept_id)?
            {
                return Err(AppError::UnknownDepartment(dept_id.clone()));
            }

            let emp = Employee {
                id: code.clone().unwrap_or_else(|| derive_code(name)),
                name: name.clone(),
                department_id: dept.clone(),
                created_at: Local::now().to_rfc3339(),
            };
            insert_employee(&pool.conn, &emp)?;
            audit(&pool.conn, "add", "employee", &emp.id)?;
            success(format!("Added employee '{}' (code {}).", emp.name, emp.id));
            return Ok(());
        }

        if let Some(emp_id) = del {
            delete_employee(&pool.conn, emp_id)?;
            audit(&pool.conn, "del", "employee", emp_id)?;
            success(format!("Deleted employee {}.", emp_id));
            return Ok(());
        }

        if *list {
            let employees = load_employees(&pool.conn)?;
            if employees.is_empty() {
                warning("No employees defined.");
                return Ok(());
            }

            let mut table = Table::new(&["code", "name", "department"], &cfg.separator_char);
            for e in employees {
                table.add_row(vec![
                    e.id,
                    e.name,
                    e.department_id.unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        warning("Nothing to do: specify --add, --del or --list.");
    }

    Ok(())
}
