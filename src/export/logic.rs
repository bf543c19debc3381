// src/export/logic.rs

use crate::core::attendance::AttendanceLogic;
use crate::db::employees;
use crate::db::log::ttlog;
use crate::db::queries::{EventFilter, EventOrder};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{EventExport, ExportFormat};
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Load the event history matching `filter` (oldest first) as flat rows.
    pub fn collect(conn: &Connection, filter: &EventFilter) -> AppResult<Vec<EventExport>> {
        let events = AttendanceLogic::event_history(conn, filter, EventOrder::OldestFirst)?;

        let staff: HashMap<i64, _> = employees::list_employees(conn, false, None)?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        Ok(events
            .iter()
            .map(|ev| EventExport::from_event(ev, staff.get(&ev.employee_id)))
            .collect())
    }

    /// Export the event history. Returns the number of exported rows.
    pub fn export(
        conn: &Connection,
        format: ExportFormat,
        file: &str,
        filter: &EventFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = Self::collect(conn, filter)?;

        if rows.is_empty() {
            warning("No events found for the selected filters. Nothing to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog(
            conn,
            "export",
            format.as_str(),
            &format!("{} events → {}", rows.len(), path.display()),
        )?;

        Ok(rows.len())
    }
}
