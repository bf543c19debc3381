use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ordered list of schema migrations.
/// Each one is applied once and recorded in `log` as `migration_applied`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_departments",
        "Created departments table",
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "20250301_0002_create_employees",
        "Created employees table",
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            document       TEXT NOT NULL UNIQUE,
            name           TEXT NOT NULL,
            surname        TEXT NOT NULL,
            pin            TEXT NOT NULL CHECK(length(pin) = 4),
            role           TEXT NOT NULL DEFAULT 'worker' CHECK(role IN ('admin','worker')),
            active         INTEGER NOT NULL DEFAULT 1,
            department_id  INTEGER NOT NULL REFERENCES departments(id),
            phone          TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department_id);
        "#,
    ),
    (
        "20250301_0003_create_events",
        "Created events table",
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            kind         TEXT NOT NULL CHECK(kind IN ('entry','meal','smoke_break','dinner','shift_end')),
            date         TEXT NOT NULL,
            time         TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_date ON events(employee_id, date, time);
        CREATE INDEX IF NOT EXISTS idx_events_date_time ON events(date, time);
        "#,
    ),
    (
        "20250315_0004_add_event_geolocation",
        "Added lat/lon columns to events",
        r#"
        ALTER TABLE events ADD COLUMN lat REAL;
        ALTER TABLE events ADD COLUMN lon REAL;
        "#,
    ),
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions already recorded in the database, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Returns how many migrations were applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, message, sql)?;
        success(format!("Migration applied: {version} → {message}"));
        applied += 1;
    }

    Ok(applied)
}
