#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("memo_calendar").unwrap();
    c.env("MEMO_CALENDAR_DIR", temp.path())
        .env("NO_COLOR", "1")
        .env("COLUMNS", "80")
        .env_remove("MEMO_CALENDAR_LOG");
    c
}

fn read_store(dir: &Path) -> String {
    fs::read_to_string(dir.join("data.txt")).expect("store file")
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

#[test]
fn set_view_clear_round_trip() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["set", "2024-03-19", "dentist", "at", "3pm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2024-03-19"));
    assert_eq!(read_store(temp.path()), "2024-03-19|dentist at 3pm\n");

    cmd(&temp)
        .args(["view", "2024-03-19"])
        .assert()
        .success()
        .stdout("dentist at 3pm\n");

    cmd(&temp)
        .args(["clear", "2024-03-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2024-03-19"));
    assert_eq!(read_store(temp.path()), "");

    cmd(&temp)
        .args(["view", "2024-03-19"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn stdin_memo_keeps_newlines() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["set", "2024-02-29", "--stdin"])
        .write_stdin("  groceries\nmilk | eggs\n\n")
        .assert()
        .success();
    assert_eq!(
        read_store(temp.path()),
        "2024-02-29|groceries\\nmilk | eggs\n"
    );

    cmd(&temp)
        .args(["view", "2024-02-29"])
        .assert()
        .success()
        .stdout("groceries\nmilk | eggs\n");
}

#[test]
fn blank_text_deletes_memo() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["set", "2024-01-01", "party"]).assert().success();
    cmd(&temp)
        .args(["set", "2024-01-01", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2024-01-01"));
    assert_eq!(read_store(temp.path()), "");
}

#[test]
fn invalid_dates_are_rejected() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["set", "2023-02-29", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
    cmd(&temp)
        .args(["show", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
    assert!(!temp.path().join("data.txt").exists());
}

#[test]
fn show_renders_grid_with_previews() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("data.txt"),
        "2024-03-02|pay rent\n2024-03-15|line1\\nline2\nno separator here\n",
    )
    .unwrap();

    let out = stdout_of(cmd(&temp).args(["show", "2024-03"]).assert().success());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "March 2024");
    assert!(lines[1].starts_with("Su"));
    // Friday start: five blank cells before the 1st.
    assert_eq!(lines[2].trim_start(), "1          2");
    assert!(lines[2].starts_with(&" ".repeat(55)));
    assert!(lines[3].ends_with("pay rent"));
    assert!(out.contains("line1 lin…"));
    assert!(out.contains("31"));
    assert!(!out.contains("32"));
}

#[test]
fn show_february_lengths() {
    let temp = TempDir::new().unwrap();
    let leap = stdout_of(cmd(&temp).args(["show", "2024-02"]).assert().success());
    assert!(leap.contains("29"));
    assert!(!leap.contains("30"));

    let common =
        stdout_of(cmd(&temp).args(["show", "2023-02"]).assert().success());
    assert!(common.contains("28"));
    assert!(!common.contains("29"));
}

#[test]
fn malformed_lines_warn_but_load() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.txt"), "2024-03-02|ok\ngarbage\n")
        .unwrap();
    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-02 | ok"))
        .stderr(predicate::str::contains("skipped=1"));
}

#[test]
fn list_filters_by_month() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["set", "2024-03-02", "march"]).assert().success();
    cmd(&temp).args(["set", "2024-04-02", "april"]).assert().success();
    cmd(&temp).args(["set", "2023-12-31", "new year's eve"]).assert().success();

    let all = stdout_of(cmd(&temp).args(["list"]).assert().success());
    let dec = all.find("2023-12-31").unwrap();
    let mar = all.find("2024-03-02").unwrap();
    let apr = all.find("2024-04-02").unwrap();
    assert!(dec < mar && mar < apr);

    cmd(&temp)
        .args(["list", "--month", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("april"))
        .stdout(predicate::str::contains("march").not());
}

#[test]
fn list_empty_store() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No memos yet"));
}

#[test]
fn path_points_into_data_dir() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("data.txt");
    cmd(&temp)
        .args(["path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn unreadable_store_fails_loudly() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data.txt")).unwrap();
    cmd(&temp)
        .args(["view", "2024-03-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read memos"));
}

#[test]
fn help_topics() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcal set <date> <text...>"));
    cmd(&temp)
        .args(["help", "file-format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YYYY-MM-DD|content"));
}

#[test]
fn unknown_command_fails_after_help() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["shwo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("mcal set <date> <text...>"))
        .stderr(predicate::str::contains("Unknown command: shwo"));
}
