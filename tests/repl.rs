//! End-to-end tests driving the cumulus binary over stdin/stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A cumulus command isolated from the caller's home directory.
fn cumulus(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cumulus").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("CUMULUS_DATA_FILE");
    cmd
}

#[test]
fn greets_and_says_farewell() {
    let home = TempDir::new().unwrap();
    cumulus(&home)
        .arg("--no-save")
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Cumulus online."))
        .stdout(predicate::str::contains("\\o"));
}

#[test]
fn add_list_and_delete() {
    let home = TempDir::new().unwrap();
    cumulus(&home)
        .arg("--no-save")
        .write_stdin("add buy milk\nadd trip /from mon /to fri\nlist\ndelete 1\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  | T#1: buy milk"))
        .stdout(predicate::str::contains("  | E#2: trip | FROM mon | TO fri"))
        .stdout(predicate::str::contains("Yeeted:\n  | T#1: buy milk"))
        // After the delete, the event is renumbered to #1.
        .stdout(predicate::str::contains("E#1: trip"));
}

#[test]
fn reports_invalid_commands_and_numbers() {
    let home = TempDir::new().unwrap();
    cumulus(&home)
        .arg("--no-save")
        .write_stdin("frobnicate\nmark one\nmark 7\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"frobnicate\" is not a valid command.",
        ))
        .stdout(predicate::str::contains("\"one\" is not a valid number."))
        .stdout(predicate::str::contains("TODO #7 does not exist."));
}

#[test]
fn empty_lines_are_ignored() {
    let home = TempDir::new().unwrap();
    let assert = cumulus(&home)
        .arg("--no-save")
        .write_stdin("\n   \nbye\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Nothing between the greeting and the farewell except prompt markers.
    assert!(!stdout.contains("not a valid command"));
}

#[test]
fn persists_items_across_sessions() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("items.json");

    cumulus(&home)
        .arg("--data-file")
        .arg(&data_file)
        .write_stdin("add submit report /by friday\nbye\n")
        .assert()
        .success();

    cumulus(&home)
        .arg("--data-file")
        .arg(&data_file)
        .write_stdin("list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("D#1: submit report | BY friday"));
}

#[test]
fn json_list_output() {
    let home = TempDir::new().unwrap();
    cumulus(&home)
        .args(["--no-save", "--output", "json"])
        .write_stdin("add buy milk\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"description\": \"buy milk\""))
        .stdout(predicate::str::contains("\"type\": \"todo\""));
}

#[test]
fn config_file_sets_prompt() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".cumulus");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        "general:\n  prompt: \"cumulus> \"\n",
    )
    .unwrap();

    cumulus(&home)
        .arg("--no-save")
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cumulus> "));
}
