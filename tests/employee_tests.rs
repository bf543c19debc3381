use predicates::str::contains;

mod common;
use common::{
    ADMIN_DOC, WORKER_DOC, WORKER_PIN, init_db_with_staff, lines_with, punch_worker, run,
    setup_test_db,
};

#[test]
fn test_init_creates_default_department() {
    let db_path = setup_test_db("init_default_dept");

    run(&db_path, &["init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    run(&db_path, &["dept", "list"])
        .assert()
        .success()
        .stdout(contains("General"));

    // running it twice is harmless
    run(&db_path, &["init"]).assert().success();
}

#[test]
fn test_employee_list_and_departments() {
    let db_path = setup_test_db("employee_list");
    init_db_with_staff(&db_path);

    run(&db_path, &["employee", "list"])
        .assert()
        .success()
        .stdout(contains(ADMIN_DOC))
        .stdout(contains(WORKER_DOC))
        .stdout(contains("admin"));

    let out = run(&db_path, &["employee", "list", "--dept", "Cocina"])
        .output()
        .expect("run employee list");
    assert_eq!(lines_with(&out.stdout, WORKER_DOC).len(), 1);
    assert!(lines_with(&out.stdout, ADMIN_DOC).is_empty());

    run(&db_path, &["dept", "add", "Cocina"])
        .assert()
        .failure()
        .stderr(contains("Already exists"));
}

#[test]
fn test_employee_add_validation() {
    let db_path = setup_test_db("employee_validation");
    init_db_with_staff(&db_path);

    run(
        &db_path,
        &["employee", "add", "--doc", WORKER_DOC, "--name", "X", "--surname", "Y", "--pin", "1111"],
    )
    .assert()
    .failure()
    .stderr(contains("Already exists"));

    run(
        &db_path,
        &["employee", "add", "--doc", "55555555K", "--name", "X", "--surname", "Y", "--pin", "12a4"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid PIN"));

    run(
        &db_path,
        &[
            "employee", "add", "--doc", "55555555K", "--name", "X", "--surname", "Y", "--pin",
            "1111", "--dept", "Almacén",
        ],
    )
    .assert()
    .failure()
    .stderr(contains("Not found"));
}

#[test]
fn test_set_pin_changes_credentials() {
    let db_path = setup_test_db("employee_set_pin");
    init_db_with_staff(&db_path);

    run(&db_path, &["employee", "set-pin", "--doc", WORKER_DOC, "--pin", "4321"])
        .assert()
        .success();

    run(&db_path, &["login", "--doc", WORKER_DOC, "--pin", WORKER_PIN])
        .assert()
        .failure()
        .stderr(contains("Unauthorized"));

    run(&db_path, &["login", "--doc", WORKER_DOC, "--pin", "4321"])
        .assert()
        .success();
}

#[test]
fn test_deactivated_employee_leaves_status_board() {
    let db_path = setup_test_db("employee_deactivate");
    init_db_with_staff(&db_path);
    punch_worker(&db_path, "entry", "2025-03-10 08:00");

    run(&db_path, &["employee", "deactivate", "--doc", WORKER_DOC])
        .assert()
        .success();

    let out = run(&db_path, &["status", "--date", "2025-03-10"])
        .output()
        .expect("run status");
    assert!(lines_with(&out.stdout, WORKER_DOC).is_empty());

    run(
        &db_path,
        &["punch", "shift-end", "--doc", WORKER_DOC, "--pin", WORKER_PIN],
    )
    .assert()
    .failure()
    .stderr(contains("Unauthorized"));

    // history is kept
    run(&db_path, &["history", "--doc", WORKER_DOC])
        .assert()
        .success()
        .stdout(contains("1 events"));

    run(&db_path, &["employee", "activate", "--doc", WORKER_DOC])
        .assert()
        .success();
    let out = run(&db_path, &["status", "--date", "2025-03-10"])
        .output()
        .expect("run status");
    assert_eq!(lines_with(&out.stdout, WORKER_DOC).len(), 1);
}

#[test]
fn test_stats_and_log() {
    let db_path = setup_test_db("stats_log");
    init_db_with_staff(&db_path);
    punch_worker(&db_path, "entry", "2025-03-10 08:00");
    punch_worker(&db_path, "shift-end", "2025-03-10 17:00");

    run(&db_path, &["stats", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Active employees:"))
        .stdout(contains("Events today:"));

    run(&db_path, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("employee_add"))
        .stdout(contains("punch"));

    run(&db_path, &["db", "--check"]).assert().success();
}
