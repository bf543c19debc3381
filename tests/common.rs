#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_DOC: &str = "12345678A";
pub const ADMIN_PIN: &str = "1234";
pub const WORKER_DOC: &str = "87654321B";
pub const WORKER_PIN: &str = "5678";

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpunchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `rpunchclock --db <db> --test <args...>`
pub fn run(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = rpc();
    cmd.args(["--db", db_path, "--test"]).args(args);
    cmd
}

/// Initialize DB with a kitchen department, one admin and one worker.
pub fn init_db_with_staff(db_path: &str) {
    run(db_path, &["init"]).assert().success();

    run(db_path, &["dept", "add", "Cocina"]).assert().success();

    run(
        db_path,
        &[
            "employee", "add", "--doc", ADMIN_DOC, "--name", "Juan", "--surname",
            "García López", "--pin", ADMIN_PIN, "--role", "admin",
        ],
    )
    .assert()
    .success();

    run(
        db_path,
        &[
            "employee", "add", "--doc", WORKER_DOC, "--name", "María", "--surname",
            "Rodríguez Santos", "--pin", WORKER_PIN, "--dept", "Cocina",
        ],
    )
    .assert()
    .success();
}

/// Punch for the worker at an explicit timestamp.
pub fn punch_worker(db_path: &str, kind: &str, at: &str) {
    run(
        db_path,
        &["punch", kind, "--doc", WORKER_DOC, "--pin", WORKER_PIN, "--at", at],
    )
    .assert()
    .success();
}

/// Lines of stdout that contain `needle`.
pub fn lines_with(stdout: &[u8], needle: &str) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.contains(needle))
        .map(str::to_string)
        .collect()
}
