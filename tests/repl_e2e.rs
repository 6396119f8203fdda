use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rolo_cmd(snapshot: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg("--file").arg(snapshot);
    cmd
}

#[test]
fn test_add_show_exit_round_trip() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    // 1. Fresh start: add a contact, list, leave
    rolo_cmd(&snapshot)
        .write_stdin("add anna 1234567890 1990-05-01\nshow all\ngood bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved address book found"))
        .stdout(predicate::str::contains("Record for anna added."))
        .stdout(predicate::str::contains("All contacts:"))
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("Address book saved."))
        .stdout(predicate::str::contains("Good bye!"));

    assert!(snapshot.exists());

    // 2. Second session reloads the snapshot
    rolo_cmd(&snapshot)
        .write_stdin("phone anna\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The phone numbers for anna are:"))
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn test_session_survives_invalid_input() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    rolo_cmd(&snapshot)
        .write_stdin("add anna 123\nfrobnicate\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number format: 123"))
        .stdout(predicate::str::contains("Invalid command. Please try again."))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_delete_missing_contact_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    rolo_cmd(&snapshot)
        .write_stdin("delete ghost\nshow all\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record for ghost not found."))
        .stdout(predicate::str::contains("The contact book is empty."))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_corrupt_snapshot_falls_back_to_empty_book() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");
    fs::write(&snapshot, "definitely not json").unwrap();

    rolo_cmd(&snapshot)
        .write_stdin("show all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading address book"))
        .stdout(predicate::str::contains("The contact book is empty."));
}

#[test]
fn test_show_pages_respects_page_size_flag() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    let mut script = String::new();
    for i in 0..5 {
        script.push_str(&format!("add contact{}\n", i));
    }
    script.push_str("show pages\nexit\n");

    rolo_cmd(&snapshot)
        .arg("--page-size")
        .arg("2")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1:"))
        .stdout(predicate::str::contains("Page 3:"))
        .stdout(predicate::str::contains("contact4"));
}

#[test]
fn test_change_and_birthday_commands() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    rolo_cmd(&snapshot)
        .write_stdin(
            "add anna 1111111111 1990-05-01\n\
             change anna 1111111111 2222222222\n\
             phone anna\n\
             birthday anna\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number for anna changed to 2222222222",
        ))
        .stdout(predicate::str::contains("2222222222"))
        .stdout(predicate::str::contains("Days until anna's next birthday:"));
}

#[test]
fn test_eof_saves_and_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("book.json");

    rolo_cmd(&snapshot)
        .write_stdin("add anna 1234567890\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address book saved."))
        .stdout(predicate::str::contains("Good bye!"));

    assert!(snapshot.exists());
}
