use crate::db::employees;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use std::fs;

/// Figures shown on the admin dashboard for one reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub day: NaiveDate,
    pub active_employees: i64,
    pub employees_punched_today: i64,
    pub events_today: i64,
    pub events_this_month: i64,
}

pub fn dashboard_stats(conn: &Connection, day: NaiveDate) -> AppResult<DashboardStats> {
    let day_str = day.format("%Y-%m-%d").to_string();
    let month_prefix = format!("{:04}-{:02}-%", day.year(), day.month());

    let active_employees = employees::count_active(conn)?;

    let employees_punched_today: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT employee_id) FROM events WHERE date = ?1",
        [&day_str],
        |row| row.get(0),
    )?;

    let events_today: i64 = conn.query_row(
        "SELECT COUNT(*) FROM events WHERE date = ?1",
        [&day_str],
        |row| row.get(0),
    )?;

    let events_this_month: i64 = conn.query_row(
        "SELECT COUNT(*) FROM events WHERE date LIKE ?1",
        [&month_prefix],
        |row| row.get(0),
    )?;

    Ok(DashboardStats {
        day,
        active_employees,
        employees_punched_today,
        events_today,
        events_this_month,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;

    println!("{}• Employees:{} {}{}{}", CYAN, RESET, GREEN, employees, RESET);
    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM events", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = bounds.unwrap_or((None, None));
    let none = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.as_deref().unwrap_or(&none));
    println!("    to:   {}", last.as_deref().unwrap_or(&none));

    println!();
    Ok(())
}
