use chrono::{NaiveDate, NaiveDateTime};
use rpunchclock::core::attendance::AttendanceLogic;
use rpunchclock::core::calculator::sessions::ReportOutcome;
use rpunchclock::core::calculator::status::DayStatus;
use rpunchclock::core::employee::{EmployeeForm, EmployeeLogic};
use rpunchclock::core::punch::{PunchLogic, PunchOutcome};
use rpunchclock::db::initialize::init_db;
use rpunchclock::db::pool::DbPool;
use rpunchclock::db::queries::{EventFilter, EventOrder, append_event, count_events, query_events};
use rpunchclock::errors::AppError;
use rpunchclock::models::date_range::DateRange;
use rpunchclock::models::employee::{Employee, Role};
use rpunchclock::models::event::NewPunch;
use rpunchclock::models::event_kind::EventKind;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn, "General").unwrap();
    EmployeeLogic::add_department(&pool.conn, "Sala").unwrap();
    pool
}

fn hire(pool: &DbPool, document: &str, department: Option<&str>) -> Employee {
    let form = EmployeeForm {
        document: document.to_string(),
        name: "Test".to_string(),
        surname: document.to_string(),
        pin: "1234".to_string(),
        role: Role::Worker,
        department: department.map(str::to_string),
        phone: None,
    };
    EmployeeLogic::add(&pool.conn, &form, "General").unwrap()
}

fn punch(pool: &DbPool, emp: &Employee, kind: EventKind, at: &str) -> i64 {
    append_event(&pool.conn, &NewPunch::new(emp.id, kind, ts(at))).unwrap()
}

#[test]
fn append_assigns_increasing_ids_and_keeps_every_event() {
    let pool = setup();
    let emp = hire(&pool, "A1", None);

    let mut ids = Vec::new();
    for h in 8..13 {
        ids.push(punch(&pool, &emp, EventKind::Meal, &format!("2025-03-10 {h:02}:00:00")));
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let filter = EventFilter::employee(emp.id);
    assert_eq!(count_events(&pool.conn, &filter).unwrap(), 5);

    let newest = query_events(&pool.conn, &filter, EventOrder::NewestFirst).unwrap();
    let oldest = query_events(&pool.conn, &filter, EventOrder::OldestFirst).unwrap();
    assert_eq!(newest.first().map(|e| e.id), ids.last().copied());
    assert_eq!(oldest.first().map(|e| e.id), ids.first().copied());
}

#[test]
fn append_for_unknown_employee_is_not_found() {
    let pool = setup();
    let err = append_event(
        &pool.conn,
        &NewPunch::new(4242, EventKind::Entry, ts("2025-03-10 08:00:00")),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn events_appended_out_of_order_are_sorted_by_timestamp() {
    let pool = setup();
    let emp = hire(&pool, "A1", None);

    punch(&pool, &emp, EventKind::ShiftEnd, "2025-03-10 17:00:00");
    punch(&pool, &emp, EventKind::Entry, "2025-03-10 08:00:00");

    let events = query_events(
        &pool.conn,
        &EventFilter::employee(emp.id),
        EventOrder::OldestFirst,
    )
    .unwrap();
    assert_eq!(events[0].kind, EventKind::Entry);

    let report =
        AttendanceLogic::worked_duration(&pool.conn, emp.id, DateRange::day(day("2025-03-10")))
            .unwrap();
    assert_eq!(report.total_seconds, 9 * 3600);
    assert_eq!(report.outcome(), ReportOutcome::Complete);
}

#[test]
fn statuses_are_per_employee_and_department() {
    let pool = setup();
    let a = hire(&pool, "A1", None);
    let b = hire(&pool, "B2", Some("Sala"));
    let _idle = hire(&pool, "C3", Some("Sala"));

    punch(&pool, &a, EventKind::Entry, "2025-03-10 08:00:00");
    punch(&pool, &b, EventKind::Entry, "2025-03-10 09:00:00");
    punch(&pool, &b, EventKind::SmokeBreak, "2025-03-10 10:15:00");

    let all = AttendanceLogic::current_statuses(&pool.conn, day("2025-03-10"), None).unwrap();
    assert_eq!(all.len(), 3);

    let kind_of = |doc: &str| {
        all.iter()
            .find(|s| s.employee.document == doc)
            .and_then(|s| s.status.last_kind())
    };
    assert_eq!(kind_of("A1"), Some(EventKind::Entry));
    assert_eq!(kind_of("B2"), Some(EventKind::SmokeBreak));
    assert_eq!(kind_of("C3"), None);

    let sala_id = b.department_id;
    let sala =
        AttendanceLogic::current_statuses(&pool.conn, day("2025-03-10"), Some(sala_id)).unwrap();
    assert_eq!(sala.len(), 2);
    assert!(sala.iter().all(|s| s.employee.department == "Sala"));
}

#[test]
fn identical_timestamps_resolve_to_latest_append() {
    let pool = setup();
    let emp = hire(&pool, "A1", None);

    punch(&pool, &emp, EventKind::Entry, "2025-03-10 08:00:00");
    let last = punch(&pool, &emp, EventKind::Meal, "2025-03-10 08:00:00");

    let statuses =
        AttendanceLogic::current_statuses(&pool.conn, day("2025-03-10"), None).unwrap();
    match &statuses[0].status {
        DayStatus::Last(d) => {
            assert_eq!(d.event_id, last);
            assert_eq!(d.last_kind, EventKind::Meal);
        }
        DayStatus::NoRecordToday => panic!("expected a status"),
    }
}

#[test]
fn worked_duration_errors() {
    let pool = setup();
    let emp = hire(&pool, "A1", None);

    let err = AttendanceLogic::worked_duration(&pool.conn, 999, DateRange::day(day("2025-03-10")))
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let inverted = DateRange {
        from: day("2025-03-10"),
        to: day("2025-03-01"),
    };
    let err = AttendanceLogic::worked_duration(&pool.conn, emp.id, inverted).unwrap_err();
    assert!(matches!(err, AppError::InvalidQuery(_)));

    let empty =
        AttendanceLogic::worked_duration(&pool.conn, emp.id, DateRange::day(day("2025-03-10")))
            .unwrap();
    assert_eq!(empty.outcome(), ReportOutcome::NoData);
    assert_eq!(empty.total_seconds, 0);
}

#[test]
fn duplicate_window_ignores_repeated_punch() {
    let pool = setup();
    let emp = hire(&pool, "A1", None);

    let (_, first) = PunchLogic::submit(
        &pool.conn,
        "A1",
        "1234",
        EventKind::Entry,
        ts("2025-03-10 08:00:00"),
        None,
        60,
    )
    .unwrap();
    let PunchOutcome::Recorded(first_id) = first else {
        panic!("first punch must be recorded");
    };

    let (_, again) = PunchLogic::submit(
        &pool.conn,
        "A1",
        "1234",
        EventKind::Entry,
        ts("2025-03-10 08:00:30"),
        None,
        60,
    )
    .unwrap();
    assert_eq!(again, PunchOutcome::Ignored(first_id));

    // window disabled: every punch is written
    let (_, forced) = PunchLogic::submit(
        &pool.conn,
        "A1",
        "1234",
        EventKind::Entry,
        ts("2025-03-10 08:00:40"),
        None,
        0,
    )
    .unwrap();
    assert!(matches!(forced, PunchOutcome::Recorded(_)));

    let filter = EventFilter::employee(emp.id);
    assert_eq!(count_events(&pool.conn, &filter).unwrap(), 2);
}

#[test]
fn submit_rejects_inactive_employee() {
    let pool = setup();
    hire(&pool, "A1", None);
    EmployeeLogic::set_active(&pool.conn, "A1", false).unwrap();

    let err = PunchLogic::submit(
        &pool.conn,
        "A1",
        "1234",
        EventKind::Entry,
        ts("2025-03-10 08:00:00"),
        None,
        0,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}
