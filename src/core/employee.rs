use crate::db::log::ttlog;
use crate::db::{departments, employees};
use crate::errors::AppResult;
use crate::models::department::Department;
use crate::models::employee::{Employee, NewEmployee, Role, validate_document, validate_pin};
use rusqlite::Connection;

/// Admin operations on employee and department records.
pub struct EmployeeLogic;

/// Input of `employee add`, before department resolution.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub document: String,
    pub name: String,
    pub surname: String,
    pub pin: String,
    pub role: Role,
    pub department: Option<String>,
    pub phone: Option<String>,
}

impl EmployeeLogic {
    pub fn add_department(conn: &Connection, name: &str) -> AppResult<Department> {
        let dept = departments::insert_department(conn, name)?;
        ttlog(conn, "dept_add", &dept.name, "Department created")?;
        Ok(dept)
    }

    /// Create an employee; an absent department means `default_department`.
    pub fn add(
        conn: &Connection,
        form: &EmployeeForm,
        default_department: &str,
    ) -> AppResult<Employee> {
        validate_document(&form.document)?;
        validate_pin(&form.pin)?;

        let dept_name = form.department.as_deref().unwrap_or(default_department);
        let dept = departments::get_department(conn, dept_name)?;

        let employee = employees::insert_employee(
            conn,
            &NewEmployee {
                document: form.document.trim().to_string(),
                name: form.name.clone(),
                surname: form.surname.clone(),
                pin: form.pin.clone(),
                role: form.role,
                department_id: dept.id,
                phone: form.phone.clone().unwrap_or_default(),
            },
        )?;

        ttlog(
            conn,
            "employee_add",
            &employee.document,
            &format!("{} ({}) in {}", employee.full_name(), form.role.to_db_str(), dept.name),
        )?;

        Ok(employee)
    }

    pub fn set_pin(conn: &Connection, document: &str, pin: &str) -> AppResult<()> {
        validate_pin(pin)?;
        employees::set_pin(conn, document, pin)?;
        ttlog(conn, "employee_pin", document, "PIN changed")
    }

    pub fn set_role(conn: &Connection, document: &str, role: Role) -> AppResult<()> {
        employees::set_role(conn, document, role)?;
        ttlog(
            conn,
            "employee_role",
            document,
            &format!("Role set to {}", role.to_db_str()),
        )
    }

    /// Soft delete: the record and its events stay in place.
    pub fn set_active(conn: &Connection, document: &str, active: bool) -> AppResult<()> {
        employees::set_active(conn, document, active)?;
        let (op, msg) = if active {
            ("employee_activate", "Employee re-activated")
        } else {
            ("employee_deactivate", "Employee deactivated")
        };
        ttlog(conn, op, document, msg)
    }
}
