use crate::db::employees;
use crate::db::log::ttlog;
use crate::db::queries::{append_event, last_event_for};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::event::{EventId, NewPunch};
use crate::models::event_kind::EventKind;
use crate::models::location::GeoPoint;
use chrono::NaiveDateTime;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    Recorded(EventId),
    /// Same kind already punched within the configured window; nothing
    /// written. Carries the id of the earlier event.
    Ignored(EventId),
}

/// High-level business logic for the `punch` and `login` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// PIN check: the employee must exist, be active and the PIN must match.
    pub fn authenticate(conn: &Connection, document: &str, pin: &str) -> AppResult<Employee> {
        let employee = employees::find_by_document(conn, document)?
            .filter(|e| e.active && e.pin_matches(pin))
            .ok_or_else(|| AppError::Unauthorized("invalid credentials".into()))?;
        Ok(employee)
    }

    /// Authenticate and append one punch.
    ///
    /// `duplicate_window_seconds > 0` enables the caller-side dedup policy:
    /// a punch of the same kind as the employee's latest event, less than that
    /// many seconds after it, is not written.
    pub fn submit(
        conn: &Connection,
        document: &str,
        pin: &str,
        kind: EventKind,
        timestamp: NaiveDateTime,
        geo: Option<GeoPoint>,
        duplicate_window_seconds: u32,
    ) -> AppResult<(Employee, PunchOutcome)> {
        let employee = Self::authenticate(conn, document, pin)?;

        if duplicate_window_seconds > 0
            && let Some(last) = last_event_for(conn, employee.id)?
            && last.kind == kind
        {
            let delta = (timestamp - last.timestamp()).num_seconds();
            if (0..i64::from(duplicate_window_seconds)).contains(&delta) {
                return Ok((employee, PunchOutcome::Ignored(last.id)));
            }
        }

        let id = append_event(
            conn,
            &NewPunch::new(employee.id, kind, timestamp).with_geo(geo),
        )?;

        ttlog(
            conn,
            "punch",
            &employee.document,
            &format!("{} at {}", kind, timestamp.format("%Y-%m-%d %H:%M:%S")),
        )?;

        Ok((employee, PunchOutcome::Recorded(id)))
    }
}
