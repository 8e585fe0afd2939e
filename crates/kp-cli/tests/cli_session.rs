//! CLI session tests driving the binary end to end.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("kopeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("parse"));
}

#[test]
fn parse_prints_a_structured_command() {
    Command::cargo_bin("kopeck")
        .unwrap()
        .args(["parse", "give", "letter", "to", "sonia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Give"))
        .stdout(predicate::str::contains("letter"))
        .stdout(predicate::str::contains("sonia"));
}

#[test]
fn parse_single_letter_shorthand() {
    Command::cargo_bin("kopeck")
        .unwrap()
        .args(["parse", "n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MoveTo"))
        .stdout(predicate::str::contains("north"));
}

#[test]
fn parse_unknown_input_suggests_examples() {
    Command::cargo_bin("kopeck")
        .unwrap()
        .args(["parse", "mumble", "quietly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"))
        .stdout(predicate::str::contains("look"));
}

#[test]
fn scripted_session_takes_and_quits() {
    Command::cargo_bin("kopeck")
        .unwrap()
        .arg("play")
        .write_stdin("take letter\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You take the letter."))
        .stdout(predicate::str::contains("letter"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn scripted_session_numbered_action() {
    // In the garret, entry 1 is "Select letter".
    Command::cargo_bin("kopeck")
        .unwrap()
        .arg("play")
        .write_stdin("1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You consider the letter"));
}
