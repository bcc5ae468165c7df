//! End-to-end CLI: add, remove, show, merge, dry-run against a temp file.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn hostedit() -> Command {
    Command::cargo_bin("hostedit").unwrap()
}

#[test]
fn add_then_show() {
    let dir = common::temp_dir();
    let path = common::write_hosts(&dir, "hosts", "# local\n127.0.0.1\tlocalhost\n");

    hostedit()
        .args(["--file", path.to_str().unwrap(), "add", "db.local", "10.0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db.local"));

    hostedit()
        .args(["--file", path.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout("# local\n127.0.0.1\tlocalhost\n10.0.0.1\tdb.local\n");
}

#[test]
fn remove_with_family_flag() {
    let dir = common::temp_dir();
    let path = common::write_hosts(&dir, "hosts", "1.2.3.4\tx.com\n::1\tx.com\n");

    hostedit()
        .args(["--file", path.to_str().unwrap(), "remove", "x.com", "--ipv4"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "::1\tx.com\n");
}

#[test]
fn dry_run_previews_without_writing() {
    let dir = common::temp_dir();
    let original = "127.0.0.1\tlocalhost\n";
    let path = common::write_hosts(&dir, "hosts", original);

    hostedit()
        .args([
            "--file",
            path.to_str().unwrap(),
            "add",
            "db.local",
            "10.0.0.1",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout("127.0.0.1\tlocalhost\n10.0.0.1\tdb.local\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn merge_other_file() {
    let dir = common::temp_dir();
    let target = common::write_hosts(&dir, "hosts", "10.0.0.2\ta.com\n10.0.0.3\tb.com\n");
    let source = common::write_hosts(&dir, "extra", "# note\n10.0.0.1\ta.com\n");

    hostedit()
        .args([
            "--file",
            target.to_str().unwrap(),
            "merge",
            source.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "10.0.0.1\ta.com\n10.0.0.3\tb.com\n"
    );
}

#[test]
fn delete_other_file() {
    let dir = common::temp_dir();
    let target = common::write_hosts(&dir, "hosts", "1.2.3.4\ta.com\n::1\ta.com\n");
    let source = common::write_hosts(&dir, "gone", "9.9.9.9\ta.com\n");

    hostedit()
        .args([
            "--file",
            target.to_str().unwrap(),
            "delete",
            source.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "::1\ta.com\n");
}

#[test]
fn invalid_address_fails_and_leaves_file_alone() {
    let dir = common::temp_dir();
    let original = "127.0.0.1\tlocalhost\n";
    let path = common::write_hosts(&dir, "hosts", original);

    hostedit()
        .args(["--file", path.to_str().unwrap(), "add", "h.com", "not-an-ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IP address"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = common::temp_dir();
    let path = dir.path().join("absent");

    hostedit()
        .args(["--file", path.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn env_var_selects_the_file() {
    let dir = common::temp_dir();
    let path = common::write_hosts(&dir, "hosts", "127.0.0.1\tlocalhost\n");

    hostedit()
        .env("HOSTEDIT_FILE", &path)
        .args(["add", "env.local", "10.1.1.1"])
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("10.1.1.1\tenv.local"));
}
