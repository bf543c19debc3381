use crate::db::departments;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine, then
/// makes sure the default department exists.
pub fn init_db(conn: &Connection, default_department: &str) -> AppResult<()> {
    run_pending_migrations(conn)?;
    departments::ensure_department(conn, default_department)?;
    Ok(())
}
