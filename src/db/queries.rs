//! Event log store: append-only access to the `events` table.
//!
//! Events are never updated or deleted.

use crate::db::employees;
use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::event::{EventId, NewPunch, PunchEvent};
use crate::models::event_kind::EventKind;
use crate::models::location::GeoPoint;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_EVENT: &str = "
    SELECT e.id, e.employee_id, e.kind, e.date, e.time, e.lat, e.lon, e.source, e.created_at
    FROM events e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
    /// session reconstruction, history listings
    OldestFirst,
    /// status lookups
    NewestFirst,
}

impl EventOrder {
    fn sql(&self) -> &'static str {
        match self {
            EventOrder::OldestFirst => " ORDER BY e.date ASC, e.time ASC, e.id ASC",
            EventOrder::NewestFirst => " ORDER BY e.date DESC, e.time DESC, e.id DESC",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub employee_id: Option<i64>,
    pub range: Option<DateRange>,
    pub department_id: Option<i64>,
}

impl EventFilter {
    pub fn employee(employee_id: i64) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Default::default()
        }
    }

    pub fn in_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// WHERE clause (with leading JOIN when needed) and its bound values.
    fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(dept) = self.department_id {
            sql.push_str(" JOIN employees m ON m.id = e.employee_id");
            clauses.push("m.department_id = ?");
            values.push(Value::Integer(dept));
        }
        if let Some(emp) = self.employee_id {
            clauses.push("e.employee_id = ?");
            values.push(Value::Integer(emp));
        }
        if let Some(range) = self.range {
            clauses.push("e.date >= ? AND e.date <= ?");
            values.push(Value::Text(range.start_str()));
            values.push(Value::Text(range.end_str()));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        (sql, values)
    }
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<PunchEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;
    let kind_str: String = row.get("kind")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S")
        .map_err(|_| conversion_error(AppError::InvalidTime(time_str.clone())))?;

    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(AppError::InvalidEventKind(kind_str.clone())))?;

    Ok(PunchEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        kind,
        date,
        time,
        geo: GeoPoint::from_columns(row.get("lat")?, row.get("lon")?),
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Append one punch. Only an unknown employee reference is rejected; the
/// event sequence itself is never validated here.
pub fn append_event(conn: &Connection, ev: &NewPunch) -> AppResult<EventId> {
    if !employees::exists(conn, ev.employee_id)? {
        return Err(AppError::NotFound(format!("employee #{}", ev.employee_id)));
    }

    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (employee_id, kind, date, time, lat, lon, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    stmt.execute(params![
        ev.employee_id,
        ev.kind.to_db_str(),
        ev.timestamp.date().format("%Y-%m-%d").to_string(),
        ev.timestamp.time().format("%H:%M:%S").to_string(),
        ev.geo.map(|g| g.lat),
        ev.geo.map(|g| g.lon),
        ev.source,
        NewPunch::created_at(),
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn query_events(
    conn: &Connection,
    filter: &EventFilter,
    order: EventOrder,
) -> AppResult<Vec<PunchEvent>> {
    let (where_sql, values) = filter.to_sql();
    let sql = format!("{SELECT_EVENT}{where_sql}{}", order.sql());

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection, filter: &EventFilter) -> AppResult<i64> {
    let (where_sql, values) = filter.to_sql();
    let sql = format!("SELECT COUNT(*) FROM events e{where_sql}");
    Ok(conn.query_row(&sql, params_from_iter(values), |row| row.get(0))?)
}

/// Most recent event ever written for an employee.
pub fn last_event_for(conn: &Connection, employee_id: i64) -> AppResult<Option<PunchEvent>> {
    let sql = format!(
        "{SELECT_EVENT} WHERE e.employee_id = ?1{} LIMIT 1",
        EventOrder::NewestFirst.sql()
    );
    Ok(conn.query_row(&sql, [employee_id], map_row).optional()?)
}
