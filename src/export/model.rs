// src/export/model.rs

use crate::models::employee::Employee;
use crate::models::event::PunchEvent;
use serde::Serialize;

/// Flat row for event exports: the punch plus who made it.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub document: String,
    pub employee: String,
    pub department: String,
    pub kind: String,
    pub date: String,
    pub time: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub source: String,
}

impl EventExport {
    pub fn from_event(ev: &PunchEvent, employee: Option<&Employee>) -> Self {
        Self {
            id: ev.id,
            document: employee.map(|e| e.document.clone()).unwrap_or_default(),
            employee: employee.map(Employee::full_name).unwrap_or_default(),
            department: employee.map(|e| e.department.clone()).unwrap_or_default(),
            kind: ev.kind.to_db_str().to_string(),
            date: ev.date_str(),
            time: ev.time_str(),
            lat: ev.geo.map(|g| g.lat),
            lon: ev.geo.map(|g| g.lon),
            source: ev.source.clone(),
        }
    }
}
