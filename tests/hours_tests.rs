use predicates::str::contains;

mod common;
use common::{WORKER_DOC, init_db_with_staff, punch_worker, run, setup_test_db};

#[test]
fn test_hours_unknown_employee_fails() {
    let db_path = setup_test_db("hours_unknown");
    init_db_with_staff(&db_path);

    run(&db_path, &["hours", "--doc", "99999999X", "-p", "2025-03"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_hours_inverted_range_fails() {
    let db_path = setup_test_db("hours_inverted");
    init_db_with_staff(&db_path);

    run(
        &db_path,
        &["hours", "--doc", WORKER_DOC, "-p", "2025-03-31:2025-03-01"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid query"));
}

#[test]
fn test_hours_no_data() {
    let db_path = setup_test_db("hours_nodata");
    init_db_with_staff(&db_path);

    run(&db_path, &["hours", "--doc", WORKER_DOC, "-p", "2025-03"])
        .assert()
        .success()
        .stdout(contains("No data for 87654321B"));
}

#[test]
fn test_hours_month_sums_several_days() {
    let db_path = setup_test_db("hours_month");
    init_db_with_staff(&db_path);

    punch_worker(&db_path, "entry", "2025-03-10 08:00");
    punch_worker(&db_path, "shift-end", "2025-03-10 16:30");
    punch_worker(&db_path, "entry", "2025-03-11 09:00");
    punch_worker(&db_path, "smoke-break", "2025-03-11 11:00");
    punch_worker(&db_path, "shift-end", "2025-03-11 13:00:30");

    run(&db_path, &["hours", "--doc", WORKER_DOC, "-p", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Closed sessions: 2 | Open sessions: 0"))
        .stdout(contains("12h 30m 30s"));
}

#[test]
fn test_hours_reports_anomalies() {
    let db_path = setup_test_db("hours_anomalies");
    init_db_with_staff(&db_path);

    punch_worker(&db_path, "meal", "2025-03-10 07:30");
    punch_worker(&db_path, "entry", "2025-03-10 08:00");
    punch_worker(&db_path, "entry", "2025-03-10 09:00");
    punch_worker(&db_path, "shift-end", "2025-03-10 17:00");
    punch_worker(&db_path, "shift-end", "2025-03-10 17:05");

    run(&db_path, &["hours", "--doc", WORKER_DOC, "-p", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Closed sessions: 1 | Open sessions: 1"))
        .stdout(contains("08h 00m"))
        .stdout(contains("Anomaly:"));
}

#[test]
fn test_hours_json_output() {
    let db_path = setup_test_db("hours_json");
    init_db_with_staff(&db_path);

    punch_worker(&db_path, "entry", "2025-03-10 08:00");
    punch_worker(&db_path, "shift-end", "2025-03-10 17:00");
    punch_worker(&db_path, "entry", "2025-03-11 08:00");

    let out = run(
        &db_path,
        &["hours", "--doc", WORKER_DOC, "-p", "2025-03", "--json"],
    )
    .output()
    .expect("run hours --json");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(v["document"], WORKER_DOC);
    assert_eq!(v["outcome"], "incomplete");
    assert_eq!(v["total_seconds"], 9 * 3600);
    assert_eq!(v["closed_sessions"].as_array().map(Vec::len), Some(1));
    assert_eq!(v["open_sessions"].as_array().map(Vec::len), Some(1));
}
