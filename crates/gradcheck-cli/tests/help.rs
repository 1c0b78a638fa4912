use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the gradcheck binary.
#[allow(deprecated)]
fn gradcheck_cmd() -> Command {
    Command::cargo_bin("gradcheck").unwrap()
}

#[test]
fn help_works() {
    gradcheck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn audit_help_lists_profile_inputs() {
    gradcheck_cmd()
        .args(["audit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--course"))
        .stdout(predicate::str::contains("--strict"));
}
