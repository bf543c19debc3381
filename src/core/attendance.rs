//! Attendance deriver: current statuses, worked durations and event history,
//! computed on demand from the event log. Nothing here writes or caches.

use crate::core::calculator::sessions::WorkedReport;
use crate::core::calculator::status::{DayStatus, derive_status};
use crate::db::employees;
use crate::db::queries::{EventFilter, EventOrder, query_events};
use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::employee::Employee;
use crate::models::event::PunchEvent;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

/// One line of the status board.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeStatus {
    pub employee: Employee,
    pub status: DayStatus,
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Status of every active employee on `day`, optionally restricted to
    /// one department. Each employee is derived independently from their own
    /// events of that day.
    pub fn current_statuses(
        conn: &Connection,
        day: NaiveDate,
        department_id: Option<i64>,
    ) -> AppResult<Vec<EmployeeStatus>> {
        let staff = employees::list_employees(conn, true, department_id)?;
        let mut out = Vec::with_capacity(staff.len());

        for employee in staff {
            let events = query_events(
                conn,
                &EventFilter::employee(employee.id).in_range(DateRange::day(day)),
                EventOrder::NewestFirst,
            )?;
            let status = derive_status(&events, employee.id, day);
            out.push(EmployeeStatus { employee, status });
        }

        Ok(out)
    }

    /// Closed sessions, open sessions and total worked time of one employee
    /// in `range`.
    pub fn worked_duration(
        conn: &Connection,
        employee_id: i64,
        range: DateRange,
    ) -> AppResult<WorkedReport> {
        Self::require_employee(conn, employee_id)?;
        Self::require_range(&range)?;

        let events = query_events(
            conn,
            &EventFilter::employee(employee_id).in_range(range),
            EventOrder::OldestFirst,
        )?;

        Ok(WorkedReport::from_events(employee_id, range, &events))
    }

    /// Raw punch history matching `filter`.
    pub fn event_history(
        conn: &Connection,
        filter: &EventFilter,
        order: EventOrder,
    ) -> AppResult<Vec<PunchEvent>> {
        if let Some(id) = filter.employee_id {
            Self::require_employee(conn, id)?;
        }
        if let Some(range) = &filter.range {
            Self::require_range(range)?;
        }

        query_events(conn, filter, order)
    }

    fn require_employee(conn: &Connection, employee_id: i64) -> AppResult<()> {
        if employees::exists(conn, employee_id)? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("employee #{employee_id}")))
        }
    }

    // DateRange::new already refuses inverted ranges; struct literals do not.
    fn require_range(range: &DateRange) -> AppResult<()> {
        if range.from > range.to {
            return Err(AppError::InvalidQuery(format!(
                "inverted date range: {} is after {}",
                range.from, range.to
            )));
        }
        Ok(())
    }
}
