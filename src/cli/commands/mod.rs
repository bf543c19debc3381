pub mod config;
pub mod db;
pub mod dept;
pub mod employee;
pub mod export;
pub mod history;
pub mod hours;
pub mod init;
pub mod log;
pub mod login;
pub mod punch;
pub mod stats;
pub mod status;

use crate::db::departments;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Open the configured database.
pub(crate) fn open_pool(db_path: &str) -> AppResult<DbPool> {
    Ok(DbPool::new(db_path)?)
}

/// `--dept <name>` → department id (NotFound for unknown names).
pub(crate) fn resolve_department(conn: &Connection, name: Option<&String>) -> AppResult<Option<i64>> {
    match name {
        Some(n) => Ok(Some(departments::get_department(conn, n)?.id)),
        None => Ok(None),
    }
}
