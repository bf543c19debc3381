//! Work-session reconstruction from an employee's event log.
//!
//! Events are walked oldest-first. An `entry` opens a session, the next
//! `shift_end` closes it; meal / smoke break / dinner in between are kept as
//! annotations and never subtracted from the worked time. Sequences that do
//! not fit this shape are reported as anomalies instead of being repaired.

use crate::models::date_range::DateRange;
use crate::models::event::PunchEvent;
use crate::models::event_kind::EventKind;
use chrono::TimeDelta;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub entry: PunchEvent,
    pub shift_end: Option<PunchEvent>,
    pub annotations: Vec<PunchEvent>,
}

impl Session {
    fn open(entry: PunchEvent) -> Self {
        Self {
            entry,
            shift_end: None,
            annotations: Vec::new(),
        }
    }

    /// `shift_end - entry`; `None` while the session is open.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.shift_end
            .as_ref()
            .map(|end| end.timestamp() - self.entry.timestamp())
    }

    /// Annotations of a given kind (e.g. how many smoke breaks).
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.annotations.iter().filter(|e| e.kind == kind).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// meal / smoke_break / dinner with no open session
    EventOutsideSession,
    /// shift_end with no open session
    ShiftEndWithoutEntry,
    /// entry while a session was already open; the earlier one stays open
    EntryWhileOpen,
}

impl AnomalyKind {
    pub fn describe(&self) -> &'static str {
        match self {
            AnomalyKind::EventOutsideSession => "break event outside any session",
            AnomalyKind::ShiftEndWithoutEntry => "shift end without a matching entry",
            AnomalyKind::EntryWhileOpen => "entry while a previous session was still open",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub event: PunchEvent,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SessionSplit {
    pub closed: Vec<Session>,
    pub open: Vec<Session>,
    pub anomalies: Vec<Anomaly>,
}

pub fn build_sessions(events: &[PunchEvent]) -> SessionSplit {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.order_key());

    let mut split = SessionSplit::default();
    let mut current: Option<Session> = None;

    for ev in sorted {
        match ev.kind {
            EventKind::Entry => {
                if let Some(prev) = current.take() {
                    split.anomalies.push(Anomaly {
                        kind: AnomalyKind::EntryWhileOpen,
                        event: ev.clone(),
                    });
                    split.open.push(prev);
                }
                current = Some(Session::open(ev));
            }
            EventKind::ShiftEnd => match current.take() {
                Some(mut session) => {
                    session.shift_end = Some(ev);
                    split.closed.push(session);
                }
                None => split.anomalies.push(Anomaly {
                    kind: AnomalyKind::ShiftEndWithoutEntry,
                    event: ev,
                }),
            },
            EventKind::Meal | EventKind::SmokeBreak | EventKind::Dinner => match current.as_mut() {
                Some(session) => session.annotations.push(ev),
                None => split.anomalies.push(Anomaly {
                    kind: AnomalyKind::EventOutsideSession,
                    event: ev,
                }),
            },
        }
    }

    // Still open at the end of the range → incomplete
    if let Some(session) = current {
        split.open.push(session);
    }

    split
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    /// no events at all in the range
    NoData,
    /// every session closed
    Complete,
    /// at least one open session
    Incomplete,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkedReport {
    pub employee_id: i64,
    pub range: DateRange,
    pub event_count: usize,
    pub closed_sessions: Vec<Session>,
    pub open_sessions: Vec<Session>,
    pub anomalies: Vec<Anomaly>,
    /// sum over closed sessions only
    pub total_seconds: i64,
}

impl WorkedReport {
    pub fn from_events(employee_id: i64, range: DateRange, events: &[PunchEvent]) -> Self {
        let split = build_sessions(events);

        let total_seconds = split
            .closed
            .iter()
            .filter_map(Session::duration)
            .map(|d| d.num_seconds())
            .sum();

        Self {
            employee_id,
            range,
            event_count: events.len(),
            closed_sessions: split.closed,
            open_sessions: split.open,
            anomalies: split.anomalies,
            total_seconds,
        }
    }

    pub fn outcome(&self) -> ReportOutcome {
        if self.event_count == 0 {
            ReportOutcome::NoData
        } else if !self.open_sessions.is_empty() {
            ReportOutcome::Incomplete
        } else {
            ReportOutcome::Complete
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_seconds / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn ev(id: i64, kind: EventKind, date: &str, time: &str) -> PunchEvent {
        PunchEvent {
            id,
            employee_id: 2,
            kind,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            geo: None,
            source: "test".into(),
            created_at: String::new(),
        }
    }

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::new(
            NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(to, "%Y-%m-%d").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn meal_is_not_subtracted_from_worked_time() {
        let events = vec![
            ev(1, EventKind::Entry, "2025-03-10", "08:00:00"),
            ev(2, EventKind::Meal, "2025-03-10", "12:00:00"),
            ev(3, EventKind::ShiftEnd, "2025-03-10", "17:00:00"),
        ];
        let report = WorkedReport::from_events(2, range("2025-03-10", "2025-03-10"), &events);

        assert_eq!(report.closed_sessions.len(), 1);
        assert!(report.open_sessions.is_empty());
        assert_eq!(report.total_minutes(), 9 * 60);
        assert_eq!(report.closed_sessions[0].count_of(EventKind::Meal), 1);
        assert_eq!(report.outcome(), ReportOutcome::Complete);
    }

    #[test]
    fn duration_is_exact_to_the_second() {
        let events = vec![
            ev(1, EventKind::Entry, "2025-03-10", "08:00:17"),
            ev(2, EventKind::ShiftEnd, "2025-03-10", "16:30:05"),
        ];
        let split = build_sessions(&events);
        let d = split.closed[0].duration().unwrap();
        assert_eq!(d.num_seconds(), 8 * 3600 + 29 * 60 + 48);
    }

    #[test]
    fn unclosed_entry_is_open_and_excluded_from_total() {
        let events = vec![
            ev(1, EventKind::Entry, "2025-03-10", "08:00:00"),
            ev(2, EventKind::ShiftEnd, "2025-03-10", "12:00:00"),
            ev(3, EventKind::Entry, "2025-03-10", "15:00:00"),
        ];
        let report = WorkedReport::from_events(2, range("2025-03-10", "2025-03-10"), &events);

        assert_eq!(report.closed_sessions.len(), 1);
        assert_eq!(report.open_sessions.len(), 1);
        assert_eq!(report.open_sessions[0].entry.id, 3);
        assert_eq!(report.total_minutes(), 4 * 60);
        assert_eq!(report.outcome(), ReportOutcome::Incomplete);
    }

    #[test]
    fn empty_log_is_no_data_not_zero() {
        let report = WorkedReport::from_events(2, range("2025-03-01", "2025-03-31"), &[]);
        assert_eq!(report.outcome(), ReportOutcome::NoData);
        assert_eq!(report.total_seconds, 0);

        // zero-length but present session is a Complete report
        let events = vec![
            ev(1, EventKind::Entry, "2025-03-10", "08:00:00"),
            ev(2, EventKind::ShiftEnd, "2025-03-10", "08:00:00"),
        ];
        let report = WorkedReport::from_events(2, range("2025-03-10", "2025-03-10"), &events);
        assert_eq!(report.outcome(), ReportOutcome::Complete);
        assert_eq!(report.total_seconds, 0);
    }

    #[test]
    fn anomalies_are_reported_not_repaired() {
        let events = vec![
            ev(1, EventKind::Meal, "2025-03-10", "07:00:00"),
            ev(2, EventKind::ShiftEnd, "2025-03-10", "07:30:00"),
            ev(3, EventKind::Entry, "2025-03-10", "08:00:00"),
            ev(4, EventKind::Entry, "2025-03-10", "09:00:00"),
            ev(5, EventKind::ShiftEnd, "2025-03-10", "17:00:00"),
        ];
        let split = build_sessions(&events);

        let kinds: Vec<AnomalyKind> = split.anomalies.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AnomalyKind::EventOutsideSession,
                AnomalyKind::ShiftEndWithoutEntry,
                AnomalyKind::EntryWhileOpen,
            ]
        );
        assert_eq!(split.open.len(), 1);
        assert_eq!(split.open[0].entry.id, 3);
        assert_eq!(split.closed.len(), 1);
        assert_eq!(split.closed[0].duration().map(|d| d.num_minutes()), Some(8 * 60));
    }

    #[test]
    fn overnight_session_closes_on_next_day() {
        let events = vec![
            ev(1, EventKind::Entry, "2025-03-10", "22:00:00"),
            ev(2, EventKind::Dinner, "2025-03-10", "23:30:00"),
            ev(3, EventKind::ShiftEnd, "2025-03-11", "06:00:00"),
        ];
        let report = WorkedReport::from_events(2, range("2025-03-10", "2025-03-11"), &events);
        assert_eq!(report.closed_sessions.len(), 1);
        assert_eq!(report.total_minutes(), 8 * 60);
    }

    #[test]
    fn input_order_does_not_matter() {
        let events = vec![
            ev(3, EventKind::ShiftEnd, "2025-03-10", "17:00:00"),
            ev(1, EventKind::Entry, "2025-03-10", "08:00:00"),
        ];
        let split = build_sessions(&events);
        assert_eq!(split.closed.len(), 1);
        assert!(split.anomalies.is_empty());
    }
}
