use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_department(row: &Row) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn find_department(conn: &Connection, name: &str) -> AppResult<Option<Department>> {
    let dept = conn
        .query_row(
            "SELECT id, name FROM departments WHERE name = ?1",
            [name.trim()],
            map_department,
        )
        .optional()?;
    Ok(dept)
}

pub fn get_department(conn: &Connection, name: &str) -> AppResult<Department> {
    find_department(conn, name)?
        .ok_or_else(|| AppError::NotFound(format!("department '{}'", name.trim())))
}

pub fn insert_department(conn: &Connection, name: &str) -> AppResult<Department> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidQuery("department name is empty".into()));
    }
    if find_department(conn, name)?.is_some() {
        return Err(AppError::Duplicate(format!("department '{name}'")));
    }

    conn.execute("INSERT INTO departments (name) VALUES (?1)", params![name])?;

    Ok(Department {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

/// Get-or-create, used by `init` for the configured default department.
pub fn ensure_department(conn: &Connection, name: &str) -> AppResult<Department> {
    match find_department(conn, name)? {
        Some(d) => Ok(d),
        None => insert_department(conn, name),
    }
}

pub fn list_departments(conn: &Connection) -> AppResult<Vec<(Department, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT d.id, d.name,
                (SELECT COUNT(*) FROM employees e WHERE e.department_id = d.id AND e.active = 1)
         FROM departments d
         ORDER BY d.name ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok((map_department(row)?, row.get::<_, i64>(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
