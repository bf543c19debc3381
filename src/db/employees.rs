use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, NewEmployee, Role};
use chrono::Local;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const SELECT_EMPLOYEE: &str = "
    SELECT m.id, m.document, m.name, m.surname, m.pin, m.role, m.active,
           m.department_id, d.name AS department, m.phone
    FROM employees m
    JOIN departments d ON d.id = m.department_id";

pub fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(Employee {
        id: row.get("id")?,
        document: row.get("document")?,
        name: row.get("name")?,
        surname: row.get("surname")?,
        pin: row.get("pin")?,
        role,
        active: row.get::<_, i32>("active")? == 1,
        department_id: row.get("department_id")?,
        department: row.get("department")?,
        phone: row.get("phone")?,
    })
}

pub fn insert_employee(conn: &Connection, emp: &NewEmployee) -> AppResult<Employee> {
    if find_by_document(conn, &emp.document)?.is_some() {
        return Err(AppError::Duplicate(format!("employee '{}'", emp.document)));
    }

    conn.execute(
        "INSERT INTO employees (document, name, surname, pin, role, active, department_id, phone, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?7, ?8)",
        params![
            emp.document.trim(),
            emp.name.trim(),
            emp.surname.trim(),
            emp.pin,
            emp.role.to_db_str(),
            emp.department_id,
            emp.phone,
            Local::now().to_rfc3339(),
        ],
    )?;

    get_by_id(conn, conn.last_insert_rowid())
}

pub fn find_by_document(conn: &Connection, document: &str) -> AppResult<Option<Employee>> {
    let sql = format!("{SELECT_EMPLOYEE} WHERE m.document = ?1");
    let emp = conn
        .query_row(&sql, [document.trim()], map_employee)
        .optional()?;
    Ok(emp)
}

pub fn get_by_document(conn: &Connection, document: &str) -> AppResult<Employee> {
    find_by_document(conn, document)?
        .ok_or_else(|| AppError::NotFound(format!("employee '{}'", document.trim())))
}

pub fn get_by_id(conn: &Connection, id: i64) -> AppResult<Employee> {
    let sql = format!("{SELECT_EMPLOYEE} WHERE m.id = ?1");
    conn.query_row(&sql, [id], map_employee)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("employee #{id}")))
}

pub fn exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM employees WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

/// List employees, optionally only active ones and/or one department.
pub fn list_employees(
    conn: &Connection,
    active_only: bool,
    department_id: Option<i64>,
) -> AppResult<Vec<Employee>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if active_only {
        clauses.push("m.active = 1");
    }
    if let Some(dept) = department_id {
        clauses.push("m.department_id = ?");
        values.push(Value::Integer(dept));
    }

    let mut sql = SELECT_EMPLOYEE.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY m.surname ASC, m.name ASC, m.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn update_one(conn: &Connection, sql: &str, value: Value, document: &str) -> AppResult<()> {
    let changed = conn.execute(sql, params![value, document.trim()])?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("employee '{}'", document.trim())));
    }
    Ok(())
}

pub fn set_pin(conn: &Connection, document: &str, pin: &str) -> AppResult<()> {
    update_one(
        conn,
        "UPDATE employees SET pin = ?1 WHERE document = ?2",
        Value::Text(pin.to_string()),
        document,
    )
}

pub fn set_role(conn: &Connection, document: &str, role: Role) -> AppResult<()> {
    update_one(
        conn,
        "UPDATE employees SET role = ?1 WHERE document = ?2",
        Value::Text(role.to_db_str().to_string()),
        document,
    )
}

/// Soft delete / restore. Employees are never removed.
pub fn set_active(conn: &Connection, document: &str, active: bool) -> AppResult<()> {
    update_one(
        conn,
        "UPDATE employees SET active = ?1 WHERE document = ?2",
        Value::Integer(i64::from(active)),
        document,
    )
}

pub fn count_active(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM employees WHERE active = 1",
        [],
        |row| row.get(0),
    )?)
}
