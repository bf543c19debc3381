use crate::cli::commands::{open_pool, resolve_department};
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::{EmployeeForm, EmployeeLogic};
use crate::db::employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::describe_active;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = open_pool(&cfg.database)?;
        let conn = &pool.conn;

        match action {
            EmployeeAction::Add {
                doc,
                name,
                surname,
                pin,
                role,
                dept,
                phone,
            } => {
                let form = EmployeeForm {
                    document: doc.clone(),
                    name: name.clone(),
                    surname: surname.clone(),
                    pin: pin.clone(),
                    role: *role,
                    department: dept.clone(),
                    phone: phone.clone(),
                };
                let emp = EmployeeLogic::add(conn, &form, &cfg.default_department)?;
                success(format!(
                    "Employee {} ({}) created in {}.",
                    emp.full_name(),
                    emp.document,
                    emp.department
                ));
            }

            EmployeeAction::List { all, dept } => {
                let dept_id = resolve_department(conn, dept.as_ref())?;
                let staff = employees::list_employees(conn, !*all, dept_id)?;

                if staff.is_empty() {
                    info("No employees found.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![
                        Column::new("DOCUMENT", 12),
                        Column::new("NAME", 28),
                        Column::new("ROLE", 7),
                        Column::new("DEPARTMENT", 16),
                        Column::new("STATE", 8),
                    ],
                    &cfg.separator_char,
                );
                for e in staff {
                    table.add_row(vec![
                        e.document.clone(),
                        e.full_name(),
                        e.role.to_db_str().to_string(),
                        e.department.clone(),
                        describe_active(e.active),
                    ]);
                }
                print!("{}", table.render());
            }

            EmployeeAction::SetPin { doc, pin } => {
                EmployeeLogic::set_pin(conn, doc, pin)?;
                success(format!("PIN updated for {}.", doc));
            }

            EmployeeAction::SetRole { doc, role } => {
                EmployeeLogic::set_role(conn, doc, *role)?;
                success(format!("Role of {} set to {}.", doc, role.to_db_str()));
            }

            EmployeeAction::Deactivate { doc } => {
                EmployeeLogic::set_active(conn, doc, false)?;
                success(format!("Employee {} deactivated.", doc));
            }

            EmployeeAction::Activate { doc } => {
                EmployeeLogic::set_active(conn, doc, true)?;
                success(format!("Employee {} activated.", doc));
            }
        }
    }
    Ok(())
}
