use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, DeptAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::departments;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dept { action } = cmd {
        let pool = open_pool(&cfg.database)?;

        match action {
            DeptAction::Add { name } => {
                let dept = EmployeeLogic::add_department(&pool.conn, name)?;
                success(format!("Department '{}' created (id {}).", dept.name, dept.id));
            }
            DeptAction::List => {
                let rows = departments::list_departments(&pool.conn)?;
                if rows.is_empty() {
                    info("No departments.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![
                        Column::new("ID", 4),
                        Column::new("DEPARTMENT", 24),
                        Column::new("ACTIVE", 6),
                    ],
                    &cfg.separator_char,
                );
                for (dept, active) in rows {
                    table.add_row(vec![dept.id.to_string(), dept.name, active.to_string()]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
