#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("mcal").unwrap();
    c.env("MEMO_CALENDAR_DIR", temp.path())
        .env("NO_COLOR", "1")
        .env("COLUMNS", "200"); // widest cells so previews are not truncated
    c
}

#[test]
fn edit_session_persists_memo() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("interactive")
        .write_stdin(":open 2024-03-08\nbuy milk\nand eggs\n:save\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- March 8, 2024 --"))
        .stdout(predicate::str::contains("buy milk and eggs"));

    let raw = fs::read_to_string(temp.path().join("data.txt")).unwrap();
    assert_eq!(raw, "2024-03-08|buy milk\\nand eggs\n");

    cmd(&temp)
        .args(["view", "2024-03-08"])
        .assert()
        .success()
        .stdout("buy milk\nand eggs\n");
}

#[test]
fn cancel_and_eof_leave_store_untouched() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.txt"), "2024-03-08|original\n").unwrap();

    cmd(&temp)
        .arg("ui")
        .write_stdin(":open 2024-03-08\nreplacement\n:cancel\n:open 2024-03-08\ndraft only\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("original"));

    let raw = fs::read_to_string(temp.path().join("data.txt")).unwrap();
    assert_eq!(raw, "2024-03-08|original\n");
}

#[test]
fn unknown_commands_are_reported() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("interactive")
        .write_stdin(":bogus\n:open 99\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: :bogus"))
        .stdout(predicate::str::contains("has no day 99"));
    assert!(!temp.path().join("data.txt").exists());
}

#[test]
fn opening_another_month_shows_it() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("interactive")
        .write_stdin(":open 2031-07-04\n::) fireworks\n:save\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("July 2031"))
        .stdout(predicate::str::contains(":) fireworks"));

    let raw = fs::read_to_string(temp.path().join("data.txt")).unwrap();
    assert_eq!(raw, "2031-07-04|:) fireworks\n");
}
