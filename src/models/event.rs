use super::{event_kind::EventKind, location::GeoPoint};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub type EventId = i64;

/// One row of the append-only punch ledger.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: EventId,
    pub employee_id: i64,       // ⇔ events.employee_id
    pub kind: EventKind,        // ⇔ events.kind
    pub date: NaiveDate,        // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,        // ⇔ events.time (TEXT "HH:MM:SS")
    pub geo: Option<GeoPoint>,  // ⇔ events.lat / events.lon
    pub source: String,         // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String,     // ⇔ events.created_at (TEXT, ISO8601)
}

/// Event not yet written; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPunch {
    pub employee_id: i64,
    pub kind: EventKind,
    pub timestamp: NaiveDateTime,
    pub geo: Option<GeoPoint>,
    pub source: String,
}

impl NewPunch {
    pub fn new(employee_id: i64, kind: EventKind, timestamp: NaiveDateTime) -> Self {
        Self {
            employee_id,
            kind,
            timestamp,
            geo: None,
            source: "cli".to_string(),
        }
    }

    pub fn with_geo(mut self, geo: Option<GeoPoint>) -> Self {
        self.geo = geo;
        self
    }

    pub fn created_at() -> String {
        Local::now().to_rfc3339()
    }
}

impl PunchEvent {
    /// Local wall-clock timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Total order used by every derivation: timestamp, then insertion id.
    pub fn order_key(&self) -> (NaiveDateTime, EventId) {
        (self.timestamp(), self.id)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
