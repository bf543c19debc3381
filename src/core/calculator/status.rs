//! Day-scoped "current status" derivation.
//!
//! The status of an employee on a day is the last event of that day, where
//! "last" means the maximal `(timestamp, id)`. Identical timestamps resolve to
//! the highest event id, i.e. the most recently appended row.

use crate::models::event::{EventId, PunchEvent};
use crate::models::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedStatus {
    pub employee_id: i64,
    pub event_id: EventId,
    pub last_kind: EventKind,
    pub last_timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DayStatus {
    NoRecordToday,
    Last(DerivedStatus),
}

impl DayStatus {
    pub fn derived(&self) -> Option<&DerivedStatus> {
        match self {
            DayStatus::Last(s) => Some(s),
            DayStatus::NoRecordToday => None,
        }
    }

    pub fn last_kind(&self) -> Option<EventKind> {
        self.derived().map(|s| s.last_kind)
    }
}

/// Derive the status of `employee_id` on `day` from any slice of events.
///
/// Events of other employees or other days are ignored, so the caller may
/// pass an unfiltered or unsorted slice.
pub fn derive_status(events: &[PunchEvent], employee_id: i64, day: NaiveDate) -> DayStatus {
    events
        .iter()
        .filter(|e| e.employee_id == employee_id && e.date == day)
        .max_by_key(|e| e.order_key())
        .map(|e| {
            DayStatus::Last(DerivedStatus {
                employee_id,
                event_id: e.id,
                last_kind: e.kind,
                last_timestamp: e.timestamp(),
            })
        })
        .unwrap_or(DayStatus::NoRecordToday)
}
